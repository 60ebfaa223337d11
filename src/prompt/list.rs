use super::{choice::ChoiceItem, BasePrompt, PromptBehavior};
use crate::{
    constants::messages,
    error::{Error, Result},
    outcome::Outcome,
    terminal::Color,
};
use serde_json::Value;

/// Numbered list of choices answered by typing an index (1-based).
#[derive(Debug, Clone, Copy)]
pub struct ListPrompt {
    /// 0-based selectable index picked by an empty answer
    default_index: usize,
}

impl ListPrompt {
    /// Fails with [`Error::MissingChoices`] when the question has no selectable choice.
    pub fn new(prompt: &BasePrompt) -> Result<Self> {
        let options = prompt.options();
        let choices = options
            .choices
            .as_ref()
            .filter(|choices| choices.len_selectable() > 0)
            .ok_or_else(|| Error::MissingChoices { name: options.name.clone() })?;

        let default_index = match &options.default {
            Some(Value::Number(number)) => number
                .as_u64()
                .and_then(|index| usize::try_from(index).ok())
                .filter(|index| *index < choices.len_selectable()),
            Some(default) => choices.position_of(default),
            None => None,
        }
        .unwrap_or(0);

        Ok(Self { default_index })
    }

    pub fn default_index(&self) -> usize {
        self.default_index
    }

    fn render(&self, prompt: &mut BasePrompt) -> Result<()> {
        let Some(choices) = prompt.options().choices.clone() else {
            return Err(Error::MissingChoices { name: prompt.options().name.clone() });
        };

        let mut lines = Vec::new();
        let mut number = 0;
        for item in choices.iter() {
            match item {
                ChoiceItem::Separator(line) => lines.push((format!("   {line}"), false)),
                ChoiceItem::Choice(choice) => {
                    let line = format!("  {}) {}", number + 1, choice.name);
                    lines.push((line, number == self.default_index));
                    number += 1;
                }
            }
        }

        let question = prompt.question();
        let terminal = prompt.terminal_mut();
        terminal.write(&question)?;
        terminal.write("\n")?;
        for (line, highlighted) in &lines {
            if *highlighted {
                terminal.set_foreground(Color::Cyan)?;
                terminal.write(line)?;
                terminal.reset_attributes()?;
            } else {
                terminal.write(line)?;
            }
            terminal.write("\n")?;
        }
        terminal.write(&format!("  {}: ", messages::LIST_ANSWER))?;

        prompt.set_height(lines.len() + 2);
        Ok(())
    }

    fn pick(&self, line: &str, selectable: usize) -> Option<usize> {
        let line = line.trim();
        if line.is_empty() {
            return Some(self.default_index);
        }
        line.parse::<usize>().ok().filter(|n| (1..=selectable).contains(n)).map(|n| n - 1)
    }
}

impl PromptBehavior for ListPrompt {
    fn collect(&mut self, prompt: &mut BasePrompt) -> Result<Outcome<Value>> {
        self.render(prompt)?;

        loop {
            let line = prompt.read_line()?;
            let picked = prompt.options().choices.as_ref().and_then(|choices| {
                self.pick(&line, choices.len_selectable())
                    .and_then(|index| choices.get(index))
                    .cloned()
            });

            match picked {
                Some(choice) => {
                    prompt.set_answered(true);
                    prompt.clean(1)?;
                    prompt.render_answer(&choice.name)?;
                    return Ok(Outcome::Ready(choice.value));
                }
                None => {
                    prompt.error(Some(messages::INVALID_INDEX))?.clean(None)?;
                    self.render(prompt)?;
                }
            }
        }
    }
}

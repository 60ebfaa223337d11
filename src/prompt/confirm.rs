use super::{BasePrompt, PromptBehavior};
use crate::{constants::messages, error::Result, outcome::Outcome};
use serde_json::Value;

/// Yes/no question. Defaults to yes unless the question's default is `false`.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmPrompt {
    default: bool,
}

impl ConfirmPrompt {
    /// Reads the boolean default and replaces the displayed hint with `Y/n` or `y/N`.
    pub fn new(prompt: &mut BasePrompt) -> Self {
        let options = prompt.options_mut();
        let default = !matches!(options.default, Some(Value::Bool(false)));
        let hint = if default { "Y/n" } else { "y/N" };
        options.default = Some(Value::String(hint.to_string()));
        Self { default }
    }

    fn parse(&self, line: &str) -> Option<bool> {
        match line.trim().to_lowercase().as_str() {
            "" => Some(self.default),
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        }
    }
}

impl PromptBehavior for ConfirmPrompt {
    fn collect(&mut self, prompt: &mut BasePrompt) -> Result<Outcome<Value>> {
        prompt.render_question()?;

        loop {
            let line = prompt.read_line()?;
            match self.parse(&line) {
                Some(confirmed) => {
                    prompt.set_answered(true);
                    prompt.clean(1)?;
                    prompt.render_answer(if confirmed { "Yes" } else { "No" })?;
                    return Ok(Outcome::Ready(Value::Bool(confirmed)));
                }
                None => {
                    prompt.error(Some(messages::INVALID_CONFIRM))?.clean(None)?;
                    prompt.render_question()?;
                }
            }
        }
    }
}

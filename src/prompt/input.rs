use super::{choice::value_to_display, BasePrompt, PromptBehavior};
use crate::{
    error::{Error, Result},
    outcome::Outcome,
    validation::Verdict,
};
use serde_json::Value;

/// Free text input. An empty line takes the default; answers are validated
/// on submission and re-asked until valid.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputPrompt;

impl InputPrompt {
    fn answer_from(&self, line: String, default: Option<&Value>) -> Value {
        match default {
            Some(default) if line.is_empty() => default.clone(),
            _ => Value::String(line),
        }
    }
}

impl PromptBehavior for InputPrompt {
    fn collect(&mut self, prompt: &mut BasePrompt) -> Result<Outcome<Value>> {
        prompt.render_question()?;

        loop {
            let line = prompt.read_line()?;
            let answer = self.answer_from(line, prompt.options().default.as_ref());

            match prompt.await_validation(&answer)? {
                Some(Verdict::Valid) => {
                    prompt.set_answered(true);
                    prompt.clean(1)?;
                    prompt.render_answer(&value_to_display(&answer))?;
                    return Ok(Outcome::Ready(answer));
                }
                Some(verdict) => {
                    log::debug!("Rejected answer {answer}: {verdict:?}");
                    prompt.error(verdict.message())?.clean(None)?;
                    prompt.render_question()?;
                }
                None => return Err(Error::Unanswered),
            }
        }
    }
}

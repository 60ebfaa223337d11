//! Picks the prompt variant for a question and asks it
//!
//! Only one question is asked per call; chaining several questions is left
//! to the caller.

use super::{
    BasePrompt, ChoiceNormalizer, ConfirmPrompt, DefaultNormalizer, InputPrompt, ListPrompt,
    Prompt,
};
use crate::{
    config::{PromptKind, Question},
    error::Result,
    input::InputLine,
    terminal::Terminal,
};
use serde_json::Value;

/// Builds prompts with a given choice normalizer.
pub struct PromptHandler<N: ChoiceNormalizer> {
    normalizer: N,
}

impl<N: ChoiceNormalizer> PromptHandler<N> {
    pub fn new(normalizer: N) -> Self {
        Self { normalizer }
    }

    /// Asks `question` and returns the filtered answer.
    pub fn ask(
        &self,
        question: Question,
        input: Box<dyn InputLine>,
        terminal: Box<dyn Terminal>,
    ) -> Result<Value> {
        let kind = question.kind;
        let mut base =
            BasePrompt::with_collaborators(question, input, terminal, &self.normalizer)?;

        match kind {
            PromptKind::Input => Prompt::new(base, InputPrompt).answer(),
            PromptKind::Confirm => {
                let confirm = ConfirmPrompt::new(&mut base);
                Prompt::new(base, confirm).answer()
            }
            PromptKind::List => {
                let list = ListPrompt::new(&base)?;
                Prompt::new(base, list).answer()
            }
        }
    }
}

impl Default for PromptHandler<DefaultNormalizer> {
    fn default() -> Self {
        Self::new(DefaultNormalizer)
    }
}

/// Asks `question` with the default choice normalizer.
pub fn ask(
    question: Question,
    input: Box<dyn InputLine>,
    terminal: Box<dyn Terminal>,
) -> Result<Value> {
    PromptHandler::default().ask(question, input, terminal)
}

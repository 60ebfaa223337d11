//! Interactive prompts
//!
//! The module is structured in layers:
//! - `base`: [`BasePrompt`], the lifecycle and terminal-line utilities every prompt shares
//! - `options`: question defaults merged into [`PromptOptions`]
//! - `choice`: choice-list normalization
//! - `input`, `confirm`, `list`: concrete prompt variants
//! - `handler`: picks a variant for a question and asks it

use crate::{
    error::{Error, Result},
    outcome::Outcome,
};
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};

pub mod base;
pub mod choice;
pub mod confirm;
pub mod handler;
pub mod input;
pub mod list;
pub mod options;

pub use base::BasePrompt;
pub use choice::{Choice, ChoiceItem, ChoiceNormalizer, Choices, DefaultNormalizer};
pub use confirm::ConfirmPrompt;
pub use handler::ask;
pub use input::InputPrompt;
pub use list::ListPrompt;
pub use options::PromptOptions;

/// Input collection for a prompt variant.
pub trait PromptBehavior {
    /// Renders the prompt and collects the raw, unfiltered answer.
    fn collect(&mut self, prompt: &mut BasePrompt) -> Result<Outcome<Value>>;
}

/// Collects nothing and finishes immediately with `Value::Null`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Bare;

impl PromptBehavior for Bare {
    fn collect(&mut self, _prompt: &mut BasePrompt) -> Result<Outcome<Value>> {
        Ok(Outcome::Ready(Value::Null))
    }
}

/// A [`BasePrompt`] together with the variant that collects its answer.
pub struct Prompt<B> {
    base: BasePrompt,
    behavior: B,
}

impl<B: PromptBehavior> Prompt<B> {
    pub fn new(base: BasePrompt, behavior: B) -> Self {
        Self { base, behavior }
    }

    pub fn base(&self) -> &BasePrompt {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BasePrompt {
        &mut self.base
    }

    /// Collects the answer, filters it, and hands the filtered value to `callback`.
    pub fn run<F>(&mut self, callback: F) -> Result<&mut Self>
    where
        F: FnOnce(Value) + 'static,
    {
        drive(&mut self.base, &mut self.behavior, callback)?;
        Ok(self)
    }

    /// Runs the prompt and returns the filtered answer.
    pub fn answer(&mut self) -> Result<Value> {
        let slot = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&slot);
        self.run(move |value| *sink.borrow_mut() = Some(value))?;
        let answer = slot.borrow_mut().take();
        answer.ok_or(Error::Unanswered)
    }
}

/// Collect, then filter, then call back; waits for pending steps before returning.
fn drive<B, F>(base: &mut BasePrompt, behavior: &mut B, callback: F) -> Result<()>
where
    B: PromptBehavior + ?Sized,
    F: FnOnce(Value) + 'static,
{
    match behavior.collect(base)? {
        Outcome::Ready(raw) => base.filter(raw, callback)?,
        Outcome::Pending(pending) => {
            log::debug!("Input collection of '{}' finishes asynchronously", base.options().name);
            let filter = base.options().filter.clone();
            base.schedule(async move {
                let Some(raw) = pending.await else { return };
                if let Some(value) = filter.call(raw).resolve().await {
                    callback(value);
                }
            })?;
        }
    }

    base.settle();
    Ok(())
}

//! Lifecycle, validation, filtering and line management shared by every prompt

use super::{
    choice::{ChoiceNormalizer, DefaultNormalizer},
    options::PromptOptions,
    Bare,
};
use crate::{
    config::Question,
    constants::{messages, ERROR_MARKER, LINE_START_COLUMNS, QUESTION_MARKER, QUESTION_SUFFIX},
    error::Result,
    input::InputLine,
    outcome::Outcome,
    terminal::{Color, ConsoleTerminal, Terminal},
    validation::Verdict,
};
use dialoguer::console::style;
use futures::{executor::LocalPool, task::LocalSpawnExt};
use serde_json::Value;
use std::{cell::RefCell, future::Future, rc::Rc};

/// State and behaviour common to all prompt variants.
///
/// A `BasePrompt` is built once per question, run once, and dropped.
pub struct BasePrompt {
    options: PromptOptions,
    /// Terminal lines currently occupied by this prompt's output
    height: usize,
    answered: bool,
    input: Box<dyn InputLine>,
    terminal: Box<dyn Terminal>,
    /// Continuations of validators and filters that answered asynchronously
    pool: LocalPool,
}

impl BasePrompt {
    /// Builds a prompt writing to the console, with the default choice normalizer.
    pub fn new(question: Question, input: impl InputLine + 'static) -> Result<Self> {
        Self::with_collaborators(
            question,
            Box::new(input),
            Box::new(ConsoleTerminal::stderr()),
            &DefaultNormalizer,
        )
    }

    pub fn with_collaborators(
        question: Question,
        input: Box<dyn InputLine>,
        terminal: Box<dyn Terminal>,
        normalizer: &dyn ChoiceNormalizer,
    ) -> Result<Self> {
        let options = PromptOptions::merge(question, normalizer)?;
        log::debug!("Created prompt '{}' ({:?})", options.name, options.kind);

        Ok(Self { options, height: 0, answered: false, input, terminal, pool: LocalPool::new() })
    }

    pub fn options(&self) -> &PromptOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut PromptOptions {
        &mut self.options
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn set_answered(&mut self, answered: bool) {
        self.answered = answered;
    }

    pub fn terminal_mut(&mut self) -> &mut dyn Terminal {
        self.terminal.as_mut()
    }

    pub fn read_line(&mut self) -> Result<String> {
        self.input.read_line()
    }

    /// Runs the prompt with no input collection: `callback` receives the
    /// filtered `Value::Null`.
    pub fn run<F>(&mut self, callback: F) -> Result<&mut Self>
    where
        F: FnOnce(Value) + 'static,
    {
        super::drive(self, &mut Bare, callback)?;
        Ok(self)
    }

    /// Judges `input` with the configured validator.
    ///
    /// A ready verdict reaches `callback` before this returns. A pending one
    /// reaches it once resolved and the prompt is settled; if it is never
    /// resolved, `callback` never runs.
    pub fn validate<F>(&self, input: &Value, callback: F) -> Result<()>
    where
        F: FnOnce(Verdict) + 'static,
    {
        match self.options.validate.call(input) {
            Outcome::Ready(verdict) => {
                callback(verdict);
                Ok(())
            }
            Outcome::Pending(pending) => {
                log::debug!("Validator of '{}' resolves asynchronously", self.options.name);
                self.schedule(async move {
                    if let Some(verdict) = pending.await {
                        callback(verdict);
                    }
                })
            }
        }
    }

    /// Transforms `input` with the configured filter. Same timing as [`validate`].
    ///
    /// [`validate`]: BasePrompt::validate
    pub fn filter<F>(&self, input: Value, callback: F) -> Result<()>
    where
        F: FnOnce(Value) + 'static,
    {
        match self.options.filter.call(input) {
            Outcome::Ready(value) => {
                callback(value);
                Ok(())
            }
            Outcome::Pending(pending) => {
                log::debug!("Filter of '{}' resolves asynchronously", self.options.name);
                self.schedule(async move {
                    if let Some(value) = pending.await {
                        callback(value);
                    }
                })
            }
        }
    }

    /// Validates and waits for the verdict. `None` if the validator's resolver
    /// was dropped unresolved.
    pub fn await_validation(&mut self, input: &Value) -> Result<Option<Verdict>> {
        let slot = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&slot);
        self.validate(input, move |verdict| *sink.borrow_mut() = Some(verdict))?;
        self.settle();
        let verdict = slot.borrow_mut().take();
        Ok(verdict)
    }

    /// Filters and waits for the result. `None` if the filter's resolver was
    /// dropped unresolved.
    pub fn await_filter(&mut self, input: Value) -> Result<Option<Value>> {
        let slot = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&slot);
        self.filter(input, move |value| *sink.borrow_mut() = Some(value))?;
        self.settle();
        let value = slot.borrow_mut().take();
        Ok(value)
    }

    /// Drives pending continuations until all of them finish.
    ///
    /// Blocks for as long as a live resolver stays unresolved; there is no
    /// timeout.
    pub fn settle(&mut self) {
        self.pool.run();
    }

    /// Drives pending continuations as far as possible without blocking.
    pub fn poll_pending(&mut self) {
        self.pool.run_until_stalled();
    }

    pub(crate) fn schedule(&self, task: impl Future<Output = ()> + 'static) -> Result<()> {
        Ok(self.pool.spawner().spawn_local(task)?)
    }

    /// Erases the prompt's `height` lines plus `extra` (none when `None`),
    /// then returns the cursor to column 0 with default attributes.
    pub fn clean(&mut self, extra: impl Into<Option<usize>>) -> Result<&mut Self> {
        let lines = self.height + extra.into().unwrap_or(0);
        log::trace!("Cleaning {lines} lines");

        for line in 0..lines {
            if line > 0 {
                self.terminal.move_up(1)?;
            }
            self.terminal.erase_line()?;
        }
        self.terminal.move_left(LINE_START_COLUMNS)?;
        self.terminal.reset_attributes()?;
        Ok(self)
    }

    /// Writes `message` (or a generic one when missing or empty) as an error
    /// on the current line, then moves the cursor up so the next render
    /// overwrites the prompt.
    pub fn error(&mut self, message: Option<&str>) -> Result<&mut Self> {
        let message =
            message.filter(|message| !message.is_empty()).unwrap_or(messages::INVALID_VALUE);

        self.terminal.erase_line()?;
        self.terminal.set_foreground(Color::Red)?;
        self.terminal.write(ERROR_MARKER)?;
        self.terminal.reset_attributes()?;
        self.terminal.write(message)?;
        self.terminal.move_up(1)?;
        Ok(self)
    }

    pub fn prefix(&self, text: &str) -> String {
        format!("[{}] {text}", style(QUESTION_MARKER).green().for_stderr())
    }

    pub fn suffix(&self, text: &str) -> String {
        format!("{text}{QUESTION_SUFFIX}")
    }

    /// The full question line, with the default hint until answered.
    pub fn question(&self) -> String {
        let mut question =
            format!("{}{}{}", self.prefix(""), self.options.message, self.suffix(""));

        if !self.answered {
            if let Some(hint) = self.options.default_hint() {
                question.push_str(&format!("({hint}) "));
            }
        }
        question
    }

    /// Writes the question line; the prompt then occupies one line.
    pub fn render_question(&mut self) -> Result<()> {
        let question = self.question();
        self.terminal.write(&question)?;
        self.height = 1;
        Ok(())
    }

    /// Writes the question line followed by the accepted answer.
    pub fn render_answer(&mut self, answer: &str) -> Result<()> {
        let question = self.question();
        self.terminal.write(&question)?;
        self.terminal.set_foreground(Color::Cyan)?;
        self.terminal.write(answer)?;
        self.terminal.reset_attributes()?;
        self.terminal.write("\n")?;
        self.height = 1;
        Ok(())
    }
}

use inquiry::{
    config::Question,
    input::ScriptedInput,
    prompt::{BasePrompt, DefaultNormalizer},
    terminal::BufferTerminal,
};
use serde_json::Value;
use std::{cell::RefCell, rc::Rc};

/// Builds a prompt that reads `lines` and records its output in the returned terminal.
pub fn scripted_prompt(question: Question, lines: &[&str]) -> (BasePrompt, BufferTerminal) {
    let terminal = BufferTerminal::new();
    let prompt = BasePrompt::with_collaborators(
        question,
        Box::new(ScriptedInput::new(lines.iter().copied())),
        Box::new(terminal.clone()),
        &DefaultNormalizer,
    )
    .unwrap();
    (prompt, terminal)
}

/// Collects every value a callback receives.
#[derive(Clone)]
pub struct Calls<T>(Rc<RefCell<Vec<T>>>);

impl<T: Clone + 'static> Calls<T> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn callback(&self) -> impl FnOnce(T) + 'static {
        let calls = Rc::clone(&self.0);
        move |value| calls.borrow_mut().push(value)
    }

    pub fn values(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}

/// Shorthand for the answers recorded by a `run` callback.
pub type Answers = Calls<Value>;

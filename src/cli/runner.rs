use crate::{
    cli::Args,
    config::Question,
    constants::DEFAULT_ANSWER_NAME,
    error::Result,
    input::{InputLine, ScriptedInput, TermInput},
    prompt::ask,
    terminal::ConsoleTerminal,
};
use serde_json::{json, Value};

/// Main CLI runner: builds the question, asks it and prints the answer
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Asks the question and prints `{name: answer}` as JSON to stdout
    pub fn run(self) -> Result<()> {
        let question = self.build_question()?;
        let name = question.name.clone();

        let answer = ask(question, self.input(), Box::new(ConsoleTerminal::stderr()))?;
        log::info!("Answered '{name}'");

        println!("{}", serde_json::to_string(&Self::report(&name, answer))?);
        Ok(())
    }

    /// Question from `--question`, or assembled from the inline flags
    fn build_question(&self) -> Result<Question> {
        let mut question = match &self.args.question {
            Some(path) => Question::load(path)?,
            None => Question::new(self.args.message.clone().unwrap_or_default())
                .with_kind(self.args.kind),
        };

        if let Some(name) = &self.args.name {
            question.name = name.clone();
        }
        if let Some(default) = self.args.default_value() {
            question.default = Some(default);
        }
        if !self.args.choices.is_empty() {
            question = question.with_choices(self.args.choices.iter().cloned());
        }
        if question.name.is_empty() {
            question.name = DEFAULT_ANSWER_NAME.to_string();
        }

        Ok(question)
    }

    fn input(&self) -> Box<dyn InputLine> {
        if self.args.inputs.is_empty() {
            Box::new(TermInput::stderr())
        } else {
            log::debug!("Answering from {} scripted line(s)", self.args.inputs.len());
            Box::new(ScriptedInput::new(self.args.inputs.iter().cloned()))
        }
    }

    fn report(name: &str, answer: Value) -> Value {
        json!({ name: answer })
    }
}

/// Runs the CLI with the given arguments
pub fn run(args: Args) -> Result<()> {
    Runner::new(args).run()
}

//! Input-line collaborator
//!
//! The base prompt only stores this handle; variants read from it while
//! collecting an answer.

use crate::error::{Error, Result};
use dialoguer::console::Term;
use std::{collections::VecDeque, io::BufRead};

/// Source of raw answer lines.
pub trait InputLine {
    /// Reads one line without its trailing newline.
    fn read_line(&mut self) -> Result<String>;
}

/// Reads lines typed into the console.
///
/// When the console is not a terminal, lines are read from stdin instead,
/// and end of input is reported as [`Error::InputExhausted`].
pub struct TermInput {
    term: Term,
    piped: Option<Box<dyn BufRead>>,
}

impl TermInput {
    pub fn new(term: Term) -> Self {
        let piped: Option<Box<dyn BufRead>> = if term.is_term() {
            None
        } else {
            log::debug!("Console is not a terminal; reading answers from stdin");
            Some(Box::new(std::io::stdin().lock()))
        };
        Self { term, piped }
    }

    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }

    /// Reads lines from `reader` rather than the console.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self { term: Term::stderr(), piped: Some(Box::new(reader)) }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::stderr()
    }
}

impl InputLine for TermInput {
    fn read_line(&mut self) -> Result<String> {
        let Some(reader) = self.piped.as_mut() else {
            return Ok(self.term.read_line()?);
        };

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::InputExhausted);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Replays a fixed sequence of lines, then reports [`Error::InputExhausted`].
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputLine for ScriptedInput {
    fn read_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or(Error::InputExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn scripted_input_replays_in_order_then_runs_out() {
        let mut input = ScriptedInput::new(["first", "second"]);

        assert_eq!(input.read_line().unwrap(), "first");
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line().unwrap(), "second");
        assert!(matches!(input.read_line(), Err(Error::InputExhausted)));
    }

    #[test]
    fn piped_input_strips_line_endings_then_runs_out() {
        let mut input = TermInput::from_reader(Cursor::new("yes\r\n\nlast"));

        assert_eq!(input.read_line().unwrap(), "yes");
        assert_eq!(input.read_line().unwrap(), "");
        assert_eq!(input.read_line().unwrap(), "last");
        assert!(matches!(input.read_line(), Err(Error::InputExhausted)));
    }

    #[test]
    fn empty_pipe_is_exhausted_immediately() {
        let mut input = TermInput::from_reader(Cursor::new(""));
        assert!(matches!(input.read_line(), Err(Error::InputExhausted)));
    }
}

//! Terminal control collaborator
//!
//! Prompts never emit control sequences themselves; they ask a [`Terminal`]
//! to move the cursor, erase lines, switch colours and write text.
//! [`ConsoleTerminal`] drives a real terminal through `console`, and
//! [`BufferTerminal`] records every request for tests and dry runs.

use crate::error::Result;
use dialoguer::console::{self, Term};
use std::cell::RefCell;
use std::rc::Rc;

/// Foreground colours a prompt may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Cyan,
}

impl Color {
    fn sgr_code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Cyan => 36,
        }
    }
}

/// Cursor, colour and output operations consumed by prompts.
pub trait Terminal {
    fn move_left(&mut self, columns: usize) -> Result<()>;
    fn move_up(&mut self, lines: usize) -> Result<()>;
    /// Erases the line under the cursor.
    fn erase_line(&mut self) -> Result<()>;
    fn set_foreground(&mut self, color: Color) -> Result<()>;
    fn reset_attributes(&mut self) -> Result<()>;
    fn write(&mut self, text: &str) -> Result<()>;
}

/// [`Terminal`] backed by a `console` terminal handle.
pub struct ConsoleTerminal {
    term: Term,
}

impl ConsoleTerminal {
    pub fn new(term: Term) -> Self {
        Self { term }
    }

    /// Writes to stderr, where dialoguer renders its own prompts.
    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }

    fn write_sgr(&mut self, code: u8) -> Result<()> {
        if console::colors_enabled_stderr() {
            self.term.write_str(&format!("\x1b[{code}m"))?;
        }
        Ok(())
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Terminal for ConsoleTerminal {
    fn move_left(&mut self, columns: usize) -> Result<()> {
        Ok(self.term.move_cursor_left(columns)?)
    }

    fn move_up(&mut self, lines: usize) -> Result<()> {
        Ok(self.term.move_cursor_up(lines)?)
    }

    fn erase_line(&mut self) -> Result<()> {
        Ok(self.term.clear_line()?)
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.write_sgr(color.sgr_code())
    }

    fn reset_attributes(&mut self) -> Result<()> {
        self.write_sgr(0)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        log::trace!("terminal write: {text:?}");
        Ok(self.term.write_str(text)?)
    }
}

/// A single request recorded by [`BufferTerminal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOp {
    MoveLeft(usize),
    MoveUp(usize),
    EraseLine,
    Foreground(Color),
    ResetAttributes,
    Write(String),
}

/// In-memory [`Terminal`]. Clones share one operation log.
#[derive(Debug, Clone, Default)]
pub struct BufferTerminal {
    ops: Rc<RefCell<Vec<TermOp>>>,
}

impl BufferTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> Vec<TermOp> {
        self.ops.borrow().clone()
    }

    /// Number of line-erase requests recorded so far.
    pub fn erased_lines(&self) -> usize {
        self.ops.borrow().iter().filter(|op| **op == TermOp::EraseLine).count()
    }

    /// Concatenation of all written text, without any cursor or colour requests.
    pub fn text(&self) -> String {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                TermOp::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }

    fn push(&mut self, op: TermOp) -> Result<()> {
        self.ops.borrow_mut().push(op);
        Ok(())
    }
}

impl Terminal for BufferTerminal {
    fn move_left(&mut self, columns: usize) -> Result<()> {
        self.push(TermOp::MoveLeft(columns))
    }

    fn move_up(&mut self, lines: usize) -> Result<()> {
        self.push(TermOp::MoveUp(lines))
    }

    fn erase_line(&mut self) -> Result<()> {
        self.push(TermOp::EraseLine)
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.push(TermOp::Foreground(color))
    }

    fn reset_attributes(&mut self) -> Result<()> {
        self.push(TermOp::ResetAttributes)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.push(TermOp::Write(text.to_string()))
    }
}

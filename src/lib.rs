/// Handles argument parsing and the command line runner.
pub mod cli;

/// Question specification and question file loading.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Line input sources: the terminal or a scripted list of lines.
pub mod input;

/// Values that are either ready or resolved later from anywhere.
pub mod outcome;

/// The base prompt lifecycle and its variants.
pub mod prompt;

/// Cursor, erase and color operations on the output stream.
pub mod terminal;

/// Answer validators and filters
pub mod validation;

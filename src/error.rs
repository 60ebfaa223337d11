use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON question. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML question. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Cannot load question from '{path}': expected one of {extensions}.")]
    UnsupportedQuestionFormat { path: String, extensions: String },

    /// A raw choice entry the normalizer cannot turn into a choice or separator.
    #[error("Choice #{index} is neither a string, a number, a boolean nor a name/value object.")]
    InvalidChoice { index: usize },

    #[error("Question '{name}' is a list but has no choices.")]
    MissingChoices { name: String },

    /// The input-line collaborator has no more lines to give.
    #[error("Input ended before the question was answered.")]
    InputExhausted,

    /// Every resolver of a pending collect/filter step was dropped unresolved.
    #[error("Prompt finished without producing an answer.")]
    Unanswered,

    #[error("Failed to schedule a pending continuation. Original error: {0}")]
    SpawnError(#[from] futures::task::SpawnError),
}

/// Convenience type alias for Results with the crate error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

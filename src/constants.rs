//! Constants used throughout inquiry

/// Question file extensions understood by the loader, in order of preference
pub const QUESTION_FILE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Glyph placed between brackets at the start of every question line
pub const QUESTION_MARKER: &str = "?";

/// Separator written after the question message
pub const QUESTION_SUFFIX: &str = ": ";

/// Marker written in front of an error message
pub const ERROR_MARKER: &str = ">> ";

/// Columns to move left when returning the cursor to the start of a line
pub const LINE_START_COLUMNS: usize = 300;

/// Key an unnamed question's answer is reported under
pub const DEFAULT_ANSWER_NAME: &str = "answer";

/// Line drawn for a separator entry that did not specify its own
pub const DEFAULT_SEPARATOR_LINE: &str = "--------";

/// Messages shown to the user
pub mod messages {
    pub const INVALID_VALUE: &str = "Please enter a valid value";
    pub const INVALID_INDEX: &str = "Please enter a valid index";
    pub const INVALID_CONFIRM: &str = "Please answer yes or no";
    pub const LIST_ANSWER: &str = "Answer";
}

/// Expression validation defaults
pub mod validation {
    pub const INVALID_ANSWER: &str = "Invalid answer";
    pub const DEFAULT_CONDITION: &str = "true";
    /// Name the answer is bound to inside validation expressions and transforms
    pub const VALUE_VARIABLE: &str = "value";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

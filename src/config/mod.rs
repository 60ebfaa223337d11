//! Question configuration
//!
//! This module contains the question specification components:
//! - `types`: Basic types and enums used by questions
//! - `question`: The question specification itself
//! - `loader`: Question file loading and parsing

pub mod loader;
pub mod question;
pub mod types;

// Re-export commonly used types for convenience
pub use question::Question;
pub use types::{PromptKind, ValidationRule};

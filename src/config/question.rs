//! Question specification

use crate::{
    config::types::{PromptKind, ValidationRule},
    validation::{Filter, Validator},
};
use serde::Deserialize;
use serde_json::Value;

/// A single question, as written by the caller or read from a question file.
///
/// `validate` and `filter` hold programmatic callables and are never read
/// from a file; `validation` and `transform` are their file-friendly
/// counterparts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Question {
    /// Key the answer is reported under
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: PromptKind,
    /// Text displayed verbatim in the question line
    #[serde(default)]
    pub message: String,
    /// Shown as a hint until the question is answered
    #[serde(default)]
    pub default: Option<Value>,
    /// Raw choice entries, normalized when the prompt is built
    #[serde(default)]
    pub choices: Option<Vec<Value>>,
    /// Expression validation used when no `validate` callable is given
    #[serde(default)]
    pub validation: Option<ValidationRule>,
    /// Template filter used when no `filter` callable is given
    #[serde(default)]
    pub transform: Option<String>,
    #[serde(skip)]
    pub validate: Option<Validator>,
    #[serde(skip)]
    pub filter: Option<Filter>,
}

impl Question {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Default::default() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: PromptKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_validate(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

//! Basic types and enums for question configuration

use crate::constants::validation;
use serde::Deserialize;

/// Kind of prompt used to ask a question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum PromptKind {
    /// Free text input
    #[default]
    Input,
    /// Yes/no confirmation
    Confirm,
    /// Numbered list of choices
    List,
}

/// Expression-based validation read from a question file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationRule {
    #[serde(default = "get_default_condition")]
    pub condition: String,
    #[serde(default = "get_default_error_message")]
    pub error_message: String,
}

impl Default for ValidationRule {
    fn default() -> Self {
        Self { condition: get_default_condition(), error_message: get_default_error_message() }
    }
}

fn get_default_error_message() -> String {
    validation::INVALID_ANSWER.to_string()
}

fn get_default_condition() -> String {
    validation::DEFAULT_CONDITION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_kind_deserializes_lowercase() {
        let kind: PromptKind = serde_json::from_str(r#""confirm""#).unwrap();
        assert_eq!(kind, PromptKind::Confirm);
        let kind: PromptKind = serde_json::from_str(r#""list""#).unwrap();
        assert_eq!(kind, PromptKind::List);
        assert!(serde_json::from_str::<PromptKind>(r#""checkbox""#).is_err());
    }

    #[test]
    fn prompt_kind_defaults_to_input() {
        assert_eq!(PromptKind::default(), PromptKind::Input);
    }

    #[test]
    fn validation_rule_deserialize_defaults() {
        let rule: ValidationRule = serde_json::from_str("{}").unwrap();
        assert_eq!(rule.condition, validation::DEFAULT_CONDITION);
        assert_eq!(rule.error_message, validation::INVALID_ANSWER);
        assert_eq!(rule, ValidationRule::default());
    }

    #[test]
    fn validation_rule_deserialize() {
        let json = r#"{"condition": "value != ''", "error_message": "Cannot be empty"}"#;
        let rule: ValidationRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.condition, "value != ''");
        assert_eq!(rule.error_message, "Cannot be empty");
    }
}

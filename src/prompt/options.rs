//! Fully-defaulted prompt options

use super::choice::{value_to_display, ChoiceNormalizer, Choices};
use crate::{
    config::{PromptKind, Question},
    error::Result,
    validation::{expression_validator, template_filter, Filter, Validator},
};
use serde_json::Value;

/// A question with every default filled in and its choices normalized.
#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub name: String,
    pub kind: PromptKind,
    pub message: String,
    pub default: Option<Value>,
    pub choices: Option<Choices>,
    pub validate: Validator,
    pub filter: Filter,
}

impl PromptOptions {
    /// Merges `question` over the defaults: caller-supplied values win.
    ///
    /// Validator precedence is `validate`, then `validation`, then accept-all;
    /// filter precedence is `filter`, then `transform`, then identity.
    pub fn merge(question: Question, normalizer: &dyn ChoiceNormalizer) -> Result<Self> {
        let Question {
            name,
            kind,
            message,
            default,
            choices,
            validation,
            transform,
            validate,
            filter,
        } = question;

        let validate = validate
            .or_else(|| validation.as_ref().map(expression_validator))
            .unwrap_or_default();
        let filter = filter
            .or_else(|| transform.as_deref().map(template_filter))
            .unwrap_or_default();
        let choices = choices.map(|raw| normalizer.normalize(&raw)).transpose()?;

        Ok(Self { name, kind, message, default, choices, validate, filter })
    }

    /// Text of the default-value hint, if the default is worth showing.
    ///
    /// `null`, `false`, `0` and the empty string are not shown. Array
    /// elements are joined with commas.
    pub fn default_hint(&self) -> Option<String> {
        let default = self.default.as_ref()?;
        let shown = match default {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64() != Some(0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        shown.then(|| match default {
            Value::Array(items) => {
                items.iter().map(value_to_display).collect::<Vec<_>>().join(",")
            }
            _ => value_to_display(default),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationRule;
    use crate::outcome::Outcome;
    use crate::prompt::choice::DefaultNormalizer;
    use crate::validation::Verdict;
    use serde_json::json;

    fn merge(question: Question) -> PromptOptions {
        PromptOptions::merge(question, &DefaultNormalizer).unwrap()
    }

    fn ready<T: std::fmt::Debug>(outcome: Outcome<T>) -> T {
        match outcome {
            Outcome::Ready(value) => value,
            Outcome::Pending(_) => panic!("expected a ready outcome"),
        }
    }

    #[test]
    fn missing_validate_and_filter_get_permissive_defaults() {
        let options = merge(Question::new("Name"));

        for input in [json!(null), json!(""), json!("x"), json!(0), json!([1])] {
            assert_eq!(ready(options.validate.call(&input)), Verdict::Valid);
            assert_eq!(ready(options.filter.call(input.clone())), input);
        }
    }

    #[test]
    fn explicit_callables_win_over_file_rules() {
        let mut question = Question::new("Name")
            .with_validate(Validator::sync(|_| "from callable"))
            .with_filter(Filter::sync(|_| json!("filtered")));
        question.validation = Some(ValidationRule::default());
        question.transform = Some("{{ value }}!".to_string());

        let options = merge(question);

        assert_eq!(ready(options.validate.call(&json!("x"))), Verdict::from("from callable"));
        assert_eq!(ready(options.filter.call(json!("x"))), json!("filtered"));
    }

    #[test]
    fn file_rules_apply_without_callables() {
        let mut question = Question::new("Name");
        question.validation = Some(ValidationRule {
            condition: "value != ''".to_string(),
            error_message: "Required".to_string(),
        });
        question.transform = Some("{{ value | trim }}".to_string());

        let options = merge(question);

        assert_eq!(ready(options.validate.call(&json!(""))), Verdict::from("Required"));
        assert_eq!(ready(options.filter.call(json!("  Bob "))), json!("Bob"));
    }

    #[test]
    fn choices_are_replaced_by_their_normalized_form() {
        let options = merge(Question::new("Pick").with_choices(["a", "b"]));
        let expected = DefaultNormalizer.normalize(&[json!("a"), json!("b")]).unwrap();
        assert_eq!(options.choices, Some(expected));
    }

    #[test]
    fn default_hint_skips_falsy_defaults() {
        let hint = |default: Value| merge(Question::new("Q").with_default(default)).default_hint();

        assert_eq!(hint(json!("Bob")), Some("Bob".to_string()));
        assert_eq!(hint(json!(3)), Some("3".to_string()));
        assert_eq!(hint(json!(true)), Some("true".to_string()));
        assert_eq!(hint(json!("")), None);
        assert_eq!(hint(json!(0)), None);
        assert_eq!(hint(json!(false)), None);
        assert_eq!(hint(Value::Null), None);
        assert_eq!(merge(Question::new("Q")).default_hint(), None);
    }

    #[test]
    fn array_default_hint_joins_elements() {
        let options = merge(Question::new("Tags").with_default(json!([1, "two", true])));
        assert_eq!(options.default_hint(), Some("1,two,true".to_string()));
    }
}

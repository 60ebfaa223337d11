use crate::{
    config::ValidationRule,
    constants::validation::VALUE_VARIABLE,
    outcome::Outcome,
};
use minijinja::Environment;
use serde_json::Value;
use std::rc::Rc;

/// Judgement passed on an answer. Failures are data, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    /// Invalid, with the message to show the user
    Message(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Message for an invalid verdict, `None` for valid or message-less ones.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Message(message) => Some(message),
            Verdict::Valid | Verdict::Invalid => None,
        }
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }
}

impl From<&str> for Verdict {
    fn from(message: &str) -> Self {
        Verdict::Message(message.to_string())
    }
}

impl From<String> for Verdict {
    fn from(message: String) -> Self {
        Verdict::Message(message)
    }
}

/// Answer validator: judges an input now or later.
#[derive(Clone)]
pub struct Validator(Rc<dyn Fn(&Value) -> Outcome<Verdict>>);

impl Validator {
    pub fn new(f: impl Fn(&Value) -> Outcome<Verdict> + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Wraps a validator that always answers immediately.
    pub fn sync<V: Into<Verdict>>(f: impl Fn(&Value) -> V + 'static) -> Self {
        Self::new(move |input| Outcome::Ready(f(input).into()))
    }

    pub fn accept_all() -> Self {
        Self::sync(|_| true)
    }

    pub fn call(&self, input: &Value) -> Outcome<Verdict> {
        (self.0)(input)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Answer filter: transforms an input now or later.
#[derive(Clone)]
pub struct Filter(Rc<dyn Fn(Value) -> Outcome<Value>>);

impl Filter {
    pub fn new(f: impl Fn(Value) -> Outcome<Value> + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn sync(f: impl Fn(Value) -> Value + 'static) -> Self {
        Self::new(move |input| Outcome::Ready(f(input)))
    }

    pub fn identity() -> Self {
        Self::sync(|input| input)
    }

    pub fn call(&self, input: Value) -> Outcome<Value> {
        (self.0)(input)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// Validator evaluating a minijinja expression with the answer bound to `value`.
///
/// Expressions that fail to compile or evaluate let the answer through.
pub fn expression_validator(rule: &ValidationRule) -> Validator {
    let env = Environment::new();
    let condition = rule.condition.clone();
    let error_message = rule.error_message.clone();

    Validator::sync(move |input| {
        if condition.trim().is_empty() {
            return Verdict::Valid;
        }

        let evaluated = env
            .compile_expression(&condition)
            .and_then(|expr| expr.eval(value_context(input)));

        match evaluated {
            Ok(result) if result.is_true() => Verdict::Valid,
            Ok(_) => Verdict::Message(error_message.clone()),
            Err(e) => {
                log::warn!("Failed to evaluate validation condition '{condition}': {e}");
                Verdict::Valid
            }
        }
    })
}

/// Filter rendering a minijinja template with the answer bound to `value`.
///
/// Render failures leave the answer unchanged.
pub fn template_filter(template: &str) -> Filter {
    let env = Environment::new();
    let template = template.to_string();

    Filter::sync(move |input| {
        match env.render_str(&template, value_context(&input)) {
            Ok(rendered) => Value::String(rendered),
            Err(e) => {
                log::warn!("Failed to render transform '{template}': {e}");
                input
            }
        }
    })
}

fn value_context(input: &Value) -> Value {
    let mut ctx = serde_json::Map::new();
    ctx.insert(VALUE_VARIABLE.to_string(), input.clone());
    Value::Object(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ready<T: std::fmt::Debug>(outcome: Outcome<T>) -> T {
        match outcome {
            Outcome::Ready(value) => value,
            Outcome::Pending(_) => panic!("expected a ready outcome"),
        }
    }

    fn rule(condition: &str, error_message: &str) -> ValidationRule {
        ValidationRule {
            condition: condition.to_string(),
            error_message: error_message.to_string(),
        }
    }

    #[test]
    fn verdict_conversions() {
        assert_eq!(Verdict::from(true), Verdict::Valid);
        assert_eq!(Verdict::from(false), Verdict::Invalid);
        assert_eq!(Verdict::from("too short"), Verdict::Message("too short".into()));
        assert_eq!(Verdict::from("x".to_string()).message(), Some("x"));
        assert!(!Verdict::Invalid.is_valid());
        assert_eq!(Verdict::Invalid.message(), None);
    }

    #[test]
    fn default_validator_and_filter_are_permissive() {
        assert_eq!(ready(Validator::default().call(&json!(null))), Verdict::Valid);
        assert_eq!(ready(Filter::default().call(json!({"a": 1}))), json!({"a": 1}));
    }

    #[test]
    fn expression_validator_reports_configured_message() {
        let validator = expression_validator(&rule("value | length > 2", "Too short"));

        assert_eq!(ready(validator.call(&json!("abc"))), Verdict::Valid);
        assert_eq!(ready(validator.call(&json!("ab"))), Verdict::Message("Too short".into()));
    }

    #[test]
    fn empty_condition_is_always_valid() {
        let validator = expression_validator(&rule("", "never shown"));
        assert_eq!(ready(validator.call(&json!(""))), Verdict::Valid);
    }

    #[test_log::test]
    fn broken_expression_lets_answer_through() {
        let validator = expression_validator(&rule("value ==", "never shown"));
        assert_eq!(ready(validator.call(&json!("anything"))), Verdict::Valid);
    }

    #[test]
    fn template_filter_renders_with_value() {
        let filter = template_filter("{{ value | upper }}");
        assert_eq!(ready(filter.call(json!("bob"))), json!("BOB"));
    }

    #[test_log::test]
    fn broken_template_returns_input() {
        let filter = template_filter("{{ value ");
        assert_eq!(ready(filter.call(json!("bob"))), json!("bob"));
    }
}

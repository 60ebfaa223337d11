//! Choice lists for selection prompts
//!
//! Raw choices come from the question as plain JSON values. A
//! [`ChoiceNormalizer`] turns them into the canonical [`Choices`] shape
//! that every variant reads.

use crate::{
    constants::DEFAULT_SEPARATOR_LINE,
    error::{Error, Result},
};
use serde_json::Value;

/// A selectable entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    /// Text shown to the user
    pub name: String,
    /// Value produced when the entry is picked
    pub value: Value,
}

/// An entry of a normalized choice list.
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceItem {
    Choice(Choice),
    /// A non-selectable line between groups of choices
    Separator(String),
}

/// Normalized, ordered choice list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choices {
    items: Vec<ChoiceItem>,
}

impl Choices {
    pub fn new(items: Vec<ChoiceItem>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChoiceItem> {
        self.items.iter()
    }

    /// Selectable entries in display order, separators skipped.
    pub fn selectable(&self) -> impl Iterator<Item = &Choice> {
        self.items.iter().filter_map(|item| match item {
            ChoiceItem::Choice(choice) => Some(choice),
            ChoiceItem::Separator(_) => None,
        })
    }

    pub fn len_selectable(&self) -> usize {
        self.selectable().count()
    }

    /// Selectable entry at `index` (0-based, separators not counted).
    pub fn get(&self, index: usize) -> Option<&Choice> {
        self.selectable().nth(index)
    }

    /// Index of the first selectable entry whose value, or name, equals `value`.
    pub fn position_of(&self, value: &Value) -> Option<usize> {
        self.selectable().position(|choice| {
            &choice.value == value || value.as_str() == Some(choice.name.as_str())
        })
    }
}

/// Turns raw question choices into a [`Choices`] list.
pub trait ChoiceNormalizer {
    fn normalize(&self, raw: &[Value]) -> Result<Choices>;
}

/// Accepts strings, numbers, booleans, `{name, value}` objects and
/// `{"type": "separator", "line": ...}` objects.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNormalizer;

impl DefaultNormalizer {
    fn normalize_entry(&self, index: usize, entry: &Value) -> Result<ChoiceItem> {
        match entry {
            Value::String(text) => {
                Ok(ChoiceItem::Choice(Choice { name: text.clone(), value: entry.clone() }))
            }
            Value::Number(_) | Value::Bool(_) => {
                Ok(ChoiceItem::Choice(Choice { name: entry.to_string(), value: entry.clone() }))
            }
            Value::Object(map) if is_separator(map) => {
                let line = map
                    .get("line")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_SEPARATOR_LINE);
                Ok(ChoiceItem::Separator(line.to_string()))
            }
            Value::Object(map) => {
                let name = map.get("name").filter(|name| !name.is_null());
                let value = map.get("value").filter(|value| !value.is_null());

                match (name, value) {
                    (Some(name), Some(value)) => Ok(ChoiceItem::Choice(Choice {
                        name: value_to_display(name),
                        value: value.clone(),
                    })),
                    (Some(name), None) => Ok(ChoiceItem::Choice(Choice {
                        name: value_to_display(name),
                        value: name.clone(),
                    })),
                    (None, Some(value)) => Ok(ChoiceItem::Choice(Choice {
                        name: value_to_display(value),
                        value: value.clone(),
                    })),
                    (None, None) => Err(Error::InvalidChoice { index }),
                }
            }
            Value::Null | Value::Array(_) => Err(Error::InvalidChoice { index }),
        }
    }
}

impl ChoiceNormalizer for DefaultNormalizer {
    fn normalize(&self, raw: &[Value]) -> Result<Choices> {
        let items = raw
            .iter()
            .enumerate()
            .map(|(index, entry)| self.normalize_entry(index, entry))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Normalized {} choice entries", items.len());
        Ok(Choices::new(items))
    }
}

fn is_separator(map: &serde_json::Map<String, Value>) -> bool {
    map.get("type").and_then(Value::as_str) == Some("separator")
}

/// Display text for a JSON value: strings without quotes, everything else as JSON.
pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

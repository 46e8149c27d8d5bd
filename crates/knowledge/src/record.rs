//! Loosely-typed monument records.
//!
//! Records arrive as arbitrary JSON objects whose fields may be strings,
//! numbers, nested objects, arrays or null. [`FieldValue`] captures every
//! shape explicitly and [`FieldValue::display`] coerces any of them to a
//! display string without failing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Keys consulted, in order, when a nested object stands in for a scalar.
const NESTED_TEXT_KEYS: [&str; 3] = ["name", "value", "text"];

/// A single record field in whatever shape the source provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Coerce the value into a display string.
    ///
    /// Strings pass through, objects yield their `name`, `value` or `text`
    /// entry (else their JSON rendering), arrays join their coerced items
    /// with a single space and null becomes `default`.
    pub fn display(&self, default: &str) -> String {
        match self {
            FieldValue::Null => default.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items
                .iter()
                .map(|item| item.display(""))
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
            FieldValue::Map(map) => NESTED_TEXT_KEYS
                .iter()
                .find_map(|key| map.get(*key))
                .map(|inner| inner.display(default))
                .unwrap_or_else(|| Value::from(self.clone()).to_string()),
        }
    }

    /// Coerce the value into a list of display strings.
    ///
    /// Arrays keep one entry per non-empty item; any other non-empty value
    /// becomes a single-entry list.
    pub fn display_list(&self) -> Vec<String> {
        match self {
            FieldValue::Null => Vec::new(),
            FieldValue::List(items) => items
                .iter()
                .map(|item| item.display(""))
                .filter(|s| !s.trim().is_empty())
                .collect(),
            other => {
                let text = other.display("");
                if text.trim().is_empty() {
                    Vec::new()
                } else {
                    vec![text]
                }
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n),
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => FieldValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                FieldValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Number(n) => Value::Number(n),
            FieldValue::Text(s) => Value::String(s),
            FieldValue::List(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            FieldValue::Map(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// A raw monument record: named fields of arbitrary shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonumentRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl MonumentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// First non-null value among `keys`, in order.
    pub fn first_of(&self, keys: &[&str]) -> Option<&FieldValue> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|value| !value.is_null())
    }

    /// Display string for the first non-null key, or empty.
    pub fn text_of(&self, keys: &[&str]) -> String {
        self.first_of(keys)
            .map(|value| value.display(""))
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    /// Display list for the first non-null key, or empty.
    pub fn list_of(&self, keys: &[&str]) -> Vec<String> {
        self.first_of(keys)
            .map(FieldValue::display_list)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Value> for MonumentRecord {
    /// Objects map field-for-field; any other JSON value is kept under `name`.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                fields: map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            },
            Value::Null => Self::default(),
            other => Self::default().with_field("name", FieldValue::from(other)),
        }
    }
}

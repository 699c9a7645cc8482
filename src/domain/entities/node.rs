//! Node entity - one flat record of the adjacency list
//!
//! A node is an ordered field map. Only the id and parent-id fields mean
//! anything to the store; everything else is payload for templates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_objects::NodeKey;

/// A flat record: field name to JSON value, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node(Map<String, Value>);

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.shift_remove(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Canonical key of `field`, `None` when the field is absent or null.
    pub fn key(&self, field: &str) -> Option<NodeKey> {
        match self.0.get(field) {
            None | Some(Value::Null) => None,
            Some(value) => Some(NodeKey::from_value(value)),
        }
    }

    /// Field value as template text (see [`value_text`])
    pub fn text(&self, field: &str) -> String {
        self.0.get(field).map(value_text).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Node {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Render a field value as template text.
///
/// Strings are verbatim, numbers use their JSON spelling, `true` is `1`,
/// `false` and `null` are empty, arrays and objects are compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truthiness of a field value: `null`, `false`, zero, `""`, `"0"` and
/// empty collections are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

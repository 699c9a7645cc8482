//! Placeholder substitution
//!
//! Templates reference fields as a marker followed by the field name
//! (`@id`, `@name`). [`substitute`] replaces each placeholder with the text of
//! the matching field in a single left-to-right pass:
//!
//! - the longest key that ends on a token boundary wins, so `@id` never eats
//!   the front of `@idx`
//! - replaced text is not scanned again
//! - placeholders without a matching field are copied through unchanged
//! - nothing is escaped
//!
//! # Example
//!
//! ```
//! use arbor::template::{substitute, FieldMap};
//!
//! let mut fields = FieldMap::new("@");
//! fields.set("id", "7");
//! fields.set("idx", "2");
//! assert_eq!(substitute("@id/@idx/@other", &fields), "7/2/@other");
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::domain::entities::{value_text, Node};

/// Marker-prefixed field values for one substitution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    marker: String,
    values: HashMap<String, String>,
}

impl FieldMap {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            values: HashMap::new(),
        }
    }

    /// Every stored field of `node`, as text
    pub fn from_node(node: &Node, marker: impl Into<String>) -> Self {
        let mut map = Self::new(marker);
        for (name, value) in node.fields() {
            map.set_value(name, value);
        }
        map
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Set a field; a later set of the same name shadows the earlier one.
    pub fn set(&mut self, name: &str, text: impl Into<String>) -> &mut Self {
        self.values
            .insert(format!("{}{}", self.marker, name), text.into());
        self
    }

    pub fn set_value(&mut self, name: &str, value: &Value) -> &mut Self {
        self.set(name, value_text(value))
    }

    /// Text of a field by bare name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(&format!("{}{}", self.marker, name))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(&format!("{}{}", self.marker, name))
    }

    /// Remove the named fields and return them as their own map
    pub fn split_off(&mut self, names: &[&str]) -> FieldMap {
        let mut taken = FieldMap::new(self.marker.clone());
        for name in names {
            let key = format!("{}{}", self.marker, name);
            if let Some(text) = self.values.remove(&key) {
                taken.values.insert(key, text);
            }
        }
        taken
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Longest key matching the start of `text` and ending on a token
    /// boundary, with its replacement.
    fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        self.values
            .iter()
            .filter(|(key, _)| text.starts_with(key.as_str()) && ends_token(text, key.len()))
            .max_by_key(|(key, _)| key.len())
            .map(|(key, value)| (key.len(), value.as_str()))
    }
}

fn ends_token(text: &str, at: usize) -> bool {
    !text[at..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Replace every known placeholder in `template`
pub fn substitute(template: &str, fields: &FieldMap) -> String {
    let marker = fields.marker();
    if marker.is_empty() || fields.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(marker) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match fields.longest_match(tail) {
            Some((len, text)) => {
                out.push_str(text);
                rest = &tail[len..];
            }
            None => {
                out.push_str(marker);
                rest = &tail[marker.len()..];
            }
        }
    }
    out.push_str(rest);
    out
}

//! Node key value object - canonical form of an identifier value
//!
//! Identifier and parent-identifier values arrive as arbitrary JSON: `1`,
//! `"1"`, `1.0` and `"01"` all name the same node. Every comparison in the
//! crate goes through [`NodeKey`] so numeric and string spellings of one id
//! always compare equal.

use std::fmt;

use serde_json::Value;

/// Canonical identifier used for all id/parent-id comparisons
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeKey(String);

impl NodeKey {
    /// Canonicalize a JSON value.
    ///
    /// - integral numbers and numeric strings become plain decimal integers
    /// - other numbers keep their shortest decimal form
    /// - other strings are kept verbatim
    /// - `true`/`false` become `1`/`0`, `null` becomes [`NodeKey::root`]
    /// - arrays and objects use their compact JSON text
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::root(),
            Value::Bool(b) => Self(if *b { "1" } else { "0" }.to_string()),
            Value::Number(n) => Self(canonical_number(n)),
            Value::String(s) => Self::parse(s),
            other => Self(other.to_string()),
        }
    }

    /// Canonicalize a textual id
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Self(i.to_string());
        }
        if looks_numeric(trimmed) {
            if let Ok(f) = trimmed.parse::<f64>() {
                if f.is_finite() {
                    return Self(canonical_float(f));
                }
            }
        }
        Self(raw.to_string())
    }

    /// The root sentinel: `0` or an empty/null parent value
    pub fn root() -> Self {
        Self("0".to_string())
    }

    /// Returns true if this key denotes "no parent"
    pub fn is_root(&self) -> bool {
        self.0.trim().is_empty() || self.0 == "0"
    }

    /// Collapse every "no parent" spelling onto [`NodeKey::root`].
    ///
    /// Applied to parent references and query ids only. A row's own id keeps
    /// its spelling, so an empty id never stands in for the root.
    pub fn or_root(self) -> Self {
        if self.is_root() {
            Self::root()
        } else {
            self
        }
    }

    /// Get the canonical text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn canonical_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(canonical_float).unwrap_or_else(|| n.to_string())
    }
}

fn canonical_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 9.0e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

// Only plain decimal spellings count as numeric; "inf", "NaN" and "1e3" stay text.
fn looks_numeric(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Value> for NodeKey {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Value> for NodeKey {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&NodeKey> for NodeKey {
    fn from(key: &NodeKey) -> Self {
        key.clone()
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NodeKey {
                fn from(n: $t) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

key_from_int!(i32, i64, u32, u64, usize);

impl AsRef<str> for NodeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Id set value object - the "selected" and "disabled" id collections
//!
//! Callers hand these over either as a comma-joined string (`"2,3"`) or as
//! an explicit list. Both are normalized here so renderers only ever test
//! membership on canonical [`NodeKey`]s.

use std::collections::HashSet;

use super::NodeKey;

/// Set of node ids with loose (canonicalized) membership
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet(HashSet<NodeKey>);

impl IdSet {
    /// The empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-joined id list. Blank entries are ignored, so `""`
    /// yields the empty set.
    pub fn from_csv(csv: &str) -> Self {
        csv.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(NodeKey::parse)
            .collect()
    }

    /// Returns true if `key` is a member
    pub fn contains(&self, key: &NodeKey) -> bool {
        self.0.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `marker` when `key` is a member, an empty string otherwise
    pub fn marker(&self, key: &NodeKey, marker: &str) -> String {
        if self.contains(key) {
            marker.to_string()
        } else {
            String::new()
        }
    }
}

impl<K: Into<NodeKey>> FromIterator<K> for IdSet {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for IdSet {
    fn from(csv: &str) -> Self {
        Self::from_csv(csv)
    }
}

impl From<String> for IdSet {
    fn from(csv: String) -> Self {
        Self::from_csv(&csv)
    }
}

impl<K: Into<NodeKey>> From<Vec<K>> for IdSet {
    fn from(ids: Vec<K>) -> Self {
        ids.into_iter().collect()
    }
}

//! Materialized tree item - a node with its guide spacer and children
//!
//! Produced by `Tree::build_tree_array`. Serializes as the node's own fields
//! followed by `spacer` and `childlist`, so JSON consumers see one flat
//! object per node with a nested `childlist` array.

use serde::Serialize;

use super::Node;

/// Field name holding the guide prefix
pub const SPACER_FIELD: &str = "spacer";
/// Field name holding the nested children
pub const CHILDLIST_FIELD: &str = "childlist";
/// Field name of the "has children" flag added when flattening
pub const HASCHILD_FIELD: &str = "haschild";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeItem {
    /// Stored fields of the node (without `spacer`/`childlist`)
    #[serde(flatten)]
    pub node: Node,

    /// Guide prefix for this item
    pub spacer: String,

    /// Materialized children, empty for leaves
    #[serde(rename = "childlist")]
    pub children: Vec<TreeItem>,
}

impl TreeItem {
    /// Wrap a node, dropping any stored `spacer`/`childlist` fields that
    /// would collide with the computed ones.
    pub fn new(mut node: Node, spacer: impl Into<String>, children: Vec<TreeItem>) -> Self {
        node.remove(SPACER_FIELD);
        node.remove(CHILDLIST_FIELD);
        Self {
            node,
            spacer: spacer.into(),
            children,
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

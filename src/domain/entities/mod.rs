//! Domain Entities
//!
//! - `Node` - a flat id/parent-id record
//! - `TreeItem` - a node materialized with its children

mod node;
mod tree_item;

pub use node::{is_truthy, value_text, Node};
pub use tree_item::{TreeItem, CHILDLIST_FIELD, HASCHILD_FIELD, SPACER_FIELD};

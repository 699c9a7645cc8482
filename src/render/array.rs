//! Array materializer and flattener
//!
//! [`Tree::build_tree_array`] returns the hierarchy as nested [`TreeItem`]s
//! carrying the same guide spacers the text renderers draw.
//! [`Tree::flatten_tree`] turns that structure back into one preorder list
//! of records ready for a table or a select box.

use log::trace;

use crate::domain::entities::{is_truthy, Node, TreeItem, HASCHILD_FIELD, SPACER_FIELD};
use crate::domain::value_objects::NodeKey;
use crate::error::ArborResult;
use crate::tree::Tree;

use super::guides::{self, Frame};

impl Tree {
    /// Materialize the children of `id` (recursively) with their spacers.
    pub fn build_tree_array(&self, id: impl Into<NodeKey>, prefix: &str) -> ArborResult<Vec<TreeItem>> {
        self.array_level(&id.into().or_root(), Frame::new(prefix))
    }

    fn array_level(&self, id: &NodeKey, frame: Frame) -> ArborResult<Vec<TreeItem>> {
        self.check_depth(id, frame.depth)?;
        let children = self.child_entries(id);
        let total = children.len();
        trace!("materializing {} children of '{}'", total, id);

        children
            .into_iter()
            .enumerate()
            .map(|(index, (key, node))| {
                let step = guides::step(self.config(), &frame.prefix, index + 1, total);
                let items = self.array_level(&key, frame.descend(step.next_prefix))?;
                Ok(TreeItem::new(node.clone(), step.spacer, items))
            })
            .collect()
    }

    /// Flatten materialized items in preorder.
    ///
    /// Every emitted record keeps its fields and `spacer`, has `field`
    /// rewritten to `spacer + " " + value` and gains a boolean `haschild`.
    /// Tombstones (see [`Tree::is_tombstone`]) are not emitted, but their
    /// children still are.
    pub fn flatten_tree(&self, items: &[TreeItem], field: &str) -> Vec<Node> {
        let mut out = Vec::new();
        self.flatten_into(items, field, &mut out);
        out
    }

    fn flatten_into(&self, items: &[TreeItem], field: &str, out: &mut Vec<Node>) {
        for item in items {
            if !self.is_tombstone(&item.node) {
                out.push(flat_record(item, field));
            }
            self.flatten_into(&item.children, field, out);
        }
    }

    /// A record whose identifier is missing or falsy (`0`, `""`, `null`, ...)
    pub fn is_tombstone(&self, node: &Node) -> bool {
        !node
            .get(&self.config().id_field)
            .is_some_and(is_truthy)
    }
}

fn flat_record(item: &TreeItem, field: &str) -> Node {
    let mut record = item.node.clone();
    let label = format!("{} {}", item.spacer, record.text(field));
    record.insert(SPACER_FIELD, item.spacer.clone());
    record.insert(field, label);
    record.insert(HASCHILD_FIELD, item.has_children());
    record
}

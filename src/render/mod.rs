//! Rendering strategies
//!
//! Every renderer walks the direct children of a starting id in store order
//! and recurses depth-first into each child before moving to the next
//! sibling. They differ in what they emit per node:
//!
//! - `list` - one template per node, concatenated, with tree guides
//! - `nested` - child markup wrapped in a tag and injected via `@childlist`
//! - `menu` - nested, plus computed menu state (classes, caret, url)
//! - `special` - guided list choosing between two templates per node
//! - `array` - nested `TreeItem`s instead of text, and their flattening
//!
//! Per node, stored fields are loaded first and computed fields (`spacer`,
//! `selected`, `disabled`, ...) are set on top, so computed values shadow
//! stored ones of the same name.

mod array;
mod guides;
mod list;
mod menu;
mod nested;
mod special;

pub use list::{ListOptions, DEFAULT_LIST_TEMPLATE};
pub use menu::{MenuClasses, MenuOptions, DEFAULT_CARET, DEFAULT_TAB_QUERY};
pub use nested::NestedOptions;
pub use special::SpecialOptions;

use log::trace;

use crate::domain::entities::Node;
use crate::domain::value_objects::{IdSet, NodeKey};
use crate::error::ArborResult;
use crate::template::FieldMap;
use crate::tree::Tree;

use guides::{Frame, Step};

/// Text set as `@selected` for members of the selected set
pub const SELECTED_MARKER: &str = "selected";
/// Text set as `@disabled` for members of the disabled set
pub const DISABLED_MARKER: &str = "disabled";

impl Tree {
    /// Stored fields of `node` plus the computed `selected`/`disabled` markers
    pub(crate) fn item_fields(
        &self,
        node: &Node,
        key: &NodeKey,
        selected: &IdSet,
        disabled: &IdSet,
    ) -> FieldMap {
        let mut fields = FieldMap::from_node(node, self.config().marker.clone());
        fields.set("selected", selected.marker(key, SELECTED_MARKER));
        fields.set("disabled", disabled.marker(key, DISABLED_MARKER));
        fields
    }

    /// Preorder walk below `id` computing the guide step of every node.
    ///
    /// `visit` runs for a node before any of its descendants.
    pub(crate) fn walk_guided<'a, F>(&'a self, id: &NodeKey, frame: Frame, visit: &mut F) -> ArborResult<()>
    where
        F: FnMut(&NodeKey, &'a Node, &Step),
    {
        self.check_depth(id, frame.depth)?;
        let children = self.child_entries(id);
        let total = children.len();
        trace!("'{}': {} children at depth {}", id, total, frame.depth);

        for (index, (key, node)) in children.into_iter().enumerate() {
            let step = guides::step(self.config(), &frame.prefix, index + 1, total);
            visit(&key, node, &step);
            self.walk_guided(&key, frame.descend(step.next_prefix), visit)?;
        }
        Ok(())
    }
}

/// `<tag attrs>inner</tag>`, or nothing when `inner` is empty
pub(crate) fn wrap(tag: &str, attrs: &str, inner: &str) -> String {
    if inner.is_empty() {
        return String::new();
    }
    if attrs.trim().is_empty() {
        format!("<{tag}>{inner}</{tag}>")
    } else {
        format!("<{tag} {attrs}>{inner}</{tag}>")
    }
}

/// Truthiness of substituted field text: empty and `"0"` are false
pub(crate) fn text_is_truthy(text: &str) -> bool {
    !(text.is_empty() || text == "0")
}

//! Flat list renderer
//!
//! One substituted template per node, concatenated in preorder. Each node
//! gets `@spacer` (the tree guide), `@selected` and `@disabled`. This is the
//! shape of a `<select>` whose options are indented into a tree.

use crate::domain::value_objects::{IdSet, NodeKey};
use crate::error::ArborResult;
use crate::template::substitute;
use crate::tree::Tree;

use super::guides::Frame;

/// Default item template: an indented `<option>`
pub const DEFAULT_LIST_TEMPLATE: &str = "<option value=@id @selected @disabled>@spacer@name</option>";

/// Options for [`Tree::render_list`]
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub item_template: String,
    /// Used instead of `item_template` for roots and for nodes with children
    pub top_template: Option<String>,
    pub selected: IdSet,
    pub disabled: IdSet,
    /// Initial guide prefix; empty means top-level items get no spacer
    pub prefix: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_TEMPLATE)
    }
}

impl ListOptions {
    pub fn new(item_template: impl Into<String>) -> Self {
        Self {
            item_template: item_template.into(),
            top_template: None,
            selected: IdSet::new(),
            disabled: IdSet::new(),
            prefix: String::new(),
        }
    }

    pub fn top_template(mut self, template: impl Into<String>) -> Self {
        self.top_template = Some(template.into());
        self
    }

    pub fn selected(mut self, ids: impl Into<IdSet>) -> Self {
        self.selected = ids.into();
        self
    }

    pub fn disabled(mut self, ids: impl Into<IdSet>) -> Self {
        self.disabled = ids.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn top(&self) -> Option<&str> {
        self.top_template.as_deref().filter(|t| !t.is_empty())
    }
}

impl Tree {
    /// Render every node below `id` as one line of a flat, guided list.
    pub fn render_list(&self, id: impl Into<NodeKey>, options: &ListOptions) -> ArborResult<String> {
        let mut out = String::new();
        self.walk_guided(&id.into().or_root(), Frame::new(options.prefix.clone()), &mut |key, node, step| {
            let mut fields = self.item_fields(node, key, &options.selected, &options.disabled);
            fields.set("spacer", step.spacer.as_str());

            let template = match options.top() {
                Some(top) if self.parent_of(node).is_root() || self.has_child_rows(key) => top,
                _ => options.item_template.as_str(),
            };
            out.push_str(&substitute(template, &fields));
        })?;
        Ok(out)
    }
}

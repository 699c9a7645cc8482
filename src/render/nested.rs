//! Nested wrapper renderer
//!
//! Each node's template is substituted first; the node's rendered children,
//! wrapped in `<wrap_tag wrap_attr>…</wrap_tag>`, then replace `@childlist`
//! in that result. Leaves get an empty `@childlist`, never an empty wrapper.

use crate::domain::entities::CHILDLIST_FIELD;
use crate::domain::value_objects::{IdSet, NodeKey};
use crate::error::ArborResult;
use crate::template::{substitute, FieldMap};
use crate::tree::Tree;

use super::wrap;

/// Options for [`Tree::render_nested`]
#[derive(Debug, Clone)]
pub struct NestedOptions {
    /// Item template; `@childlist` marks where children go
    pub item_template: String,
    pub selected: IdSet,
    pub disabled: IdSet,
    pub wrap_tag: String,
    pub wrap_attr: String,
}

impl NestedOptions {
    pub fn new(item_template: impl Into<String>) -> Self {
        Self {
            item_template: item_template.into(),
            selected: IdSet::new(),
            disabled: IdSet::new(),
            wrap_tag: "ul".to_string(),
            wrap_attr: String::new(),
        }
    }

    pub fn selected(mut self, ids: impl Into<IdSet>) -> Self {
        self.selected = ids.into();
        self
    }

    pub fn disabled(mut self, ids: impl Into<IdSet>) -> Self {
        self.disabled = ids.into();
        self
    }

    pub fn wrap(mut self, tag: impl Into<String>, attr: impl Into<String>) -> Self {
        self.wrap_tag = tag.into();
        self.wrap_attr = attr.into();
        self
    }
}

impl Tree {
    /// Render the children of `id` as nested markup.
    pub fn render_nested(&self, id: impl Into<NodeKey>, options: &NestedOptions) -> ArborResult<String> {
        self.nested_level(&id.into().or_root(), options, 0)
    }

    fn nested_level(&self, id: &NodeKey, options: &NestedOptions, depth: usize) -> ArborResult<String> {
        self.check_depth(id, depth)?;
        let mut out = String::new();

        for (key, node) in self.child_entries(id) {
            let mut fields = self.item_fields(node, &key, &options.selected, &options.disabled);
            // pre-nested payload under `child` is not template data
            fields.remove("child");
            fields.remove(CHILDLIST_FIELD);
            let item = substitute(&options.item_template, &fields);

            let children = self.nested_level(&key, options, depth + 1)?;
            let mut late = FieldMap::new(self.config().marker.clone());
            late.set("childlist", wrap(&options.wrap_tag, &options.wrap_attr, &children));
            out.push_str(&substitute(&item, &late));
        }

        Ok(out)
    }
}

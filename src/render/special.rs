//! Dual-template renderer
//!
//! Same guided preorder walk as the flat list, but each node picks one of
//! two templates: `disabled_template` when its `@disabled` field (after the
//! computed marker is merged in) is truthy, `enabled_template` otherwise.

use crate::domain::value_objects::{IdSet, NodeKey};
use crate::error::ArborResult;
use crate::template::substitute;
use crate::tree::Tree;

use super::guides::Frame;
use super::text_is_truthy;

/// Options for [`Tree::render_special`]
#[derive(Debug, Clone)]
pub struct SpecialOptions {
    pub enabled_template: String,
    pub disabled_template: String,
    pub selected: IdSet,
    pub disabled: IdSet,
    pub prefix: String,
}

impl SpecialOptions {
    pub fn new(enabled_template: impl Into<String>, disabled_template: impl Into<String>) -> Self {
        Self {
            enabled_template: enabled_template.into(),
            disabled_template: disabled_template.into(),
            selected: IdSet::new(),
            disabled: IdSet::new(),
            prefix: String::new(),
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

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl Tree {
    /// Render every node below `id`, switching templates on `@disabled`.
    pub fn render_special(&self, id: impl Into<NodeKey>, options: &SpecialOptions) -> ArborResult<String> {
        let mut out = String::new();
        self.walk_guided(&id.into().or_root(), Frame::new(options.prefix.clone()), &mut |key, node, step| {
            let mut fields = self.item_fields(node, key, &options.selected, &options.disabled);
            fields.set("spacer", step.spacer.as_str());

            let disabled = fields.get("disabled").is_some_and(text_is_truthy);
            let template = if disabled {
                &options.disabled_template
            } else {
                &options.enabled_template
            };
            out.push_str(&substitute(template, &fields));
        })?;
        Ok(out)
    }
}

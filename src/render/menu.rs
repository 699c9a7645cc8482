//! Menu renderer
//!
//! Nested rendering with computed navigation state. Substitution runs in two
//! passes because `@url`, `@caret` and `@class` depend on whether the node has
//! children, which is only known once the child markup has been rendered:
//!
//! 1. the item template with every stored field (plus `selected`/`disabled`)
//!    except `url`, `caret`, `class` and the computed-only names
//! 2. the result of pass 1 with `childlist`, `url`, `addtabs`, `caret`,
//!    `badge` and `class`
//!
//! Branch nodes (and nodes without a url) link to `javascript:;` so only
//! leaves navigate. A leaf's url, even an empty one, gets the tab-tracking
//! query in `@addtabs`.

use crate::config::MenuConfig;
use crate::domain::value_objects::{IdSet, NodeKey};
use crate::error::ArborResult;
use crate::template::{substitute, FieldMap};
use crate::tree::Tree;

use super::{text_is_truthy, wrap};

/// Expand/collapse caret for branch items
pub const DEFAULT_CARET: &str = r#"<i class="fa fa-angle-left"></i>"#;
/// Query appended to leaf urls through `@addtabs`
pub const DEFAULT_TAB_QUERY: &str = "ref=addtabs";
/// Placeholder url of non-navigable items
pub const NO_URL: &str = "javascript:;";

const DEFERRED_FIELDS: [&str; 5] = ["url", "caret", "class", "addtabs", "childlist"];

/// CSS class names written into `@class`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuClasses {
    pub active: String,
    pub disabled: String,
    pub treeview: String,
    pub open: String,
    /// Replaces `@class` inside the wrapper attributes
    pub wrapper: String,
}

impl Default for MenuClasses {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
            disabled: "disabled".to_string(),
            treeview: "treeview".to_string(),
            open: "treeview-open".to_string(),
            wrapper: "last".to_string(),
        }
    }
}

/// Options for [`Tree::render_menu`]
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub item_template: String,
    pub selected: IdSet,
    pub disabled: IdSet,
    pub wrap_tag: String,
    pub wrap_attr: String,
    /// Host setting: render branches expanded
    pub submenu_open: bool,
    pub caret: String,
    pub tab_query: String,
    pub classes: MenuClasses,
}

impl MenuOptions {
    pub fn new(item_template: impl Into<String>) -> Self {
        Self {
            item_template: item_template.into(),
            selected: IdSet::new(),
            disabled: IdSet::new(),
            wrap_tag: "ul".to_string(),
            wrap_attr: String::new(),
            submenu_open: false,
            caret: DEFAULT_CARET.to_string(),
            tab_query: DEFAULT_TAB_QUERY.to_string(),
            classes: MenuClasses::default(),
        }
    }

    /// Take the host-supplied menu settings
    pub fn with_config(mut self, config: &MenuConfig) -> Self {
        self.submenu_open = config.submenu_open;
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

    pub fn wrap(mut self, tag: impl Into<String>, attr: impl Into<String>) -> Self {
        self.wrap_tag = tag.into();
        self.wrap_attr = attr.into();
        self
    }

    pub fn submenu_open(mut self, open: bool) -> Self {
        self.submenu_open = open;
        self
    }

    fn class_list(&self, selected: bool, disabled: bool, has_children: bool) -> String {
        let mut class = String::new();
        if selected {
            class.push(' ');
            class.push_str(&self.classes.active);
        }
        if disabled {
            class.push(' ');
            class.push_str(&self.classes.disabled);
        }
        if has_children {
            class.push(' ');
            class.push_str(&self.classes.treeview);
            if self.submenu_open {
                class.push(' ');
                class.push_str(&self.classes.open);
            }
        }
        class
    }
}

impl Tree {
    /// Render the children of `id` as a navigation menu.
    pub fn render_menu(&self, id: impl Into<NodeKey>, options: &MenuOptions) -> ArborResult<String> {
        self.menu_level(&id.into().or_root(), options, 0)
    }

    fn menu_level(&self, id: &NodeKey, options: &MenuOptions, depth: usize) -> ArborResult<String> {
        self.check_depth(id, depth)?;
        let marker = self.config().marker.clone();
        let mut out = String::new();

        for (key, node) in self.child_entries(id) {
            let selected = options.selected.contains(&key);
            let disabled = options.disabled.contains(&key);

            let mut fields = self.item_fields(node, &key, &options.selected, &options.disabled);
            fields.remove("child");
            let deferred = fields.split_off(&DEFERRED_FIELDS);
            let item = substitute(&options.item_template, &fields);

            let children = self.menu_level(&key, options, depth + 1)?;
            let has_children = !children.is_empty();

            let mut wrapper_fields = FieldMap::new(marker.clone());
            wrapper_fields.set("class", options.classes.wrapper.as_str());
            let wrapper_attr = substitute(&options.wrap_attr, &wrapper_fields);

            // A present url counts even when empty; only absent or null urls fall back.
            let url = deferred
                .get("url")
                .filter(|_| !has_children && node.get("url").is_some_and(|v| !v.is_null()));
            let addtabs = match url {
                Some(url) if url.contains('?') => format!("&{}", options.tab_query),
                Some(_) => format!("?{}", options.tab_query),
                None => String::new(),
            };
            let badge = fields.get("badge").unwrap_or_default().to_string();
            let caret = if has_children && !text_is_truthy(&badge) {
                options.caret.clone()
            } else {
                String::new()
            };

            let mut late = FieldMap::new(marker.clone());
            late.set("childlist", wrap(&options.wrap_tag, &wrapper_attr, &children))
                .set("url", url.unwrap_or(NO_URL))
                .set("addtabs", addtabs)
                .set("caret", caret)
                .set("badge", badge)
                .set("class", options.class_list(selected, disabled, has_children));
            out.push_str(&substitute(&item, &late));
        }

        Ok(out)
    }
}

//! Arbor - render flat parent-id record lists as hierarchies
//!
//! Arbor takes an ordered list of records, each naming its own id and its
//! parent's id, and answers hierarchy questions (children, descendants,
//! ancestors) or renders the hierarchy as option lists with tree guides,
//! nested markup, navigation menus and nested/flattened arrays.
//!
//! ```
//! use arbor::{ListOptions, Node, Tree};
//!
//! let tree = Tree::from_nodes(vec![
//!     Node::new().with("id", 1).with("pid", 0).with("name", "Root"),
//!     Node::new().with("id", 2).with("pid", 1).with("name", "Child"),
//! ]);
//! let html = tree.render_list(0, &ListOptions::new("[@spacer@name]")).unwrap();
//! assert_eq!(html, "[Root][&nbsp;└Child]");
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;
pub mod template;
pub mod tree;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, MenuConfig, TreeConfig};
pub use domain::entities::{Node, TreeItem};
pub use domain::value_objects::{IconSet, IdSet, NodeKey};
pub use error::{ArborError, ArborResult};
pub use infrastructure::{load_nodes, parse_nodes, read_nodes};
pub use render::{ListOptions, MenuClasses, MenuOptions, NestedOptions, SpecialOptions};
pub use template::{substitute, FieldMap};
pub use tree::Tree;

//! The node store
//!
//! [`Tree`] owns a flat, ordered collection of [`Node`]s plus the
//! [`TreeConfig`] naming the id and parent-id fields. It builds no index:
//! every lookup scans the whole collection in store order, and recursive
//! operations repeat the scan at each level, so the worst case is
//! O(depth × breadth × N). Scan order is part of the contract (sibling order,
//! first-match lookups), which is why nothing here is cached.
//!
//! A `Tree` is a plain value. Nothing is mutated by traversal or rendering,
//! so one instance can be shared read-only across threads.

mod traverse;

use log::{debug, warn};

use crate::config::TreeConfig;
use crate::domain::entities::Node;
use crate::domain::value_objects::NodeKey;
use crate::error::{ArborError, ArborResult};

/// Flat node collection with its structural configuration
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    config: TreeConfig,
}

impl Tree {
    /// Empty tree with the given configuration
    pub fn new(config: TreeConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }

    /// Tree over `nodes` with the default configuration
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut tree = Self::default();
        tree.init(nodes, None, None);
        tree
    }

    /// Replace the node collection, optionally overriding the parent field
    /// name and the padding string for this instance.
    pub fn init(
        &mut self,
        nodes: impl IntoIterator<Item = Node>,
        parent_field: Option<&str>,
        padding: Option<&str>,
    ) -> &mut Self {
        self.nodes = nodes.into_iter().collect();
        if let Some(field) = parent_field {
            self.config.parent_field = field.to_string();
        }
        if let Some(padding) = padding {
            self.config.padding = padding.to_string();
        }
        debug!(
            "tree initialised with {} nodes (id field '{}', parent field '{}')",
            self.nodes.len(),
            self.config.id_field,
            self.config.parent_field
        );
        self
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TreeConfig {
        &mut self.config
    }

    /// All nodes in store order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Identifier of `node`; `None` marks a malformed row that scans skip.
    pub(crate) fn id_of(&self, node: &Node) -> Option<NodeKey> {
        node.key(&self.config.id_field)
    }

    /// Parent identifier of `node`. Missing, null, empty and `0` parents
    /// all yield [`NodeKey::root`].
    pub(crate) fn parent_of(&self, node: &Node) -> NodeKey {
        node.key(&self.config.parent_field)
            .map_or_else(NodeKey::root, NodeKey::or_root)
    }

    /// Fail once recursion passes the configured depth limit.
    pub(crate) fn check_depth(&self, id: &NodeKey, depth: usize) -> ArborResult<()> {
        if depth > self.config.max_depth {
            warn!("recursion limit {} reached at node '{}'", self.config.max_depth, id);
            return Err(ArborError::CycleDetected {
                id: id.to_string(),
                depth,
            });
        }
        Ok(())
    }
}

//! Child, descendant, parent and ancestor lookups
//!
//! `with_self` only ever concerns the queried node: `descendants` puts it
//! first, `ancestors` puts it last. Recursion never re-applies the flag, so
//! `descendants(id, true)` is exactly `[node(id)]` followed by
//! `descendants(id, false)`.

use log::trace;

use crate::domain::entities::Node;
use crate::domain::value_objects::NodeKey;
use crate::error::ArborResult;

use super::Tree;

impl Tree {
    /// First node whose identifier equals `id`
    pub fn get(&self, id: impl Into<NodeKey>) -> Option<&Node> {
        let id = id.into();
        self.nodes
            .iter()
            .find(|node| self.id_of(node).as_ref() == Some(&id))
    }

    /// Direct children of `id` in store order.
    ///
    /// Rows without an identifier are skipped. When two children share an
    /// identifier the later row takes the earlier one's place.
    pub fn children(&self, id: impl Into<NodeKey>) -> Vec<&Node> {
        self.child_entries(&id.into().or_root())
            .into_iter()
            .map(|(_, node)| node)
            .collect()
    }

    /// Children paired with their canonical ids
    pub(crate) fn child_entries(&self, id: &NodeKey) -> Vec<(NodeKey, &Node)> {
        let mut found: Vec<(NodeKey, &Node)> = Vec::new();
        for node in &self.nodes {
            let Some(key) = self.id_of(node) else {
                continue;
            };
            if self.parent_of(node) != *id {
                continue;
            }
            match found.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = node,
                None => found.push((key, node)),
            }
        }
        found
    }

    /// Returns true if any row names `id` as its parent
    pub fn has_children(&self, id: impl Into<NodeKey>) -> bool {
        self.has_child_rows(&id.into().or_root())
    }

    /// Like [`Tree::has_children`] without folding `id` onto the root
    pub(crate) fn has_child_rows(&self, id: &NodeKey) -> bool {
        self.nodes
            .iter()
            .any(|node| self.id_of(node).is_some() && self.parent_of(node) == *id)
    }

    /// Nodes whose parent is the root sentinel, in store order
    pub fn roots(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| self.id_of(node).is_some() && self.parent_of(node).is_root())
            .collect()
    }

    /// Every node below `id`, depth-first preorder.
    pub fn descendants(&self, id: impl Into<NodeKey>, with_self: bool) -> ArborResult<Vec<&Node>> {
        let id = id.into().or_root();
        let mut out = Vec::new();
        if with_self {
            if let Some(node) = self.get(&id) {
                out.push(node);
            }
        }
        self.collect_descendants(&id, 0, &mut out)?;
        Ok(out)
    }

    fn collect_descendants<'a>(
        &'a self,
        id: &NodeKey,
        depth: usize,
        out: &mut Vec<&'a Node>,
    ) -> ArborResult<()> {
        self.check_depth(id, depth)?;
        trace!("descendants of '{}' at depth {}", id, depth);
        for node in &self.nodes {
            let Some(key) = self.id_of(node) else {
                continue;
            };
            if self.parent_of(node) == *id {
                out.push(node);
                self.collect_descendants(&key, depth + 1, out)?;
            }
        }
        Ok(())
    }

    /// Identifiers of [`Tree::descendants`], same order
    pub fn descendant_ids(&self, id: impl Into<NodeKey>, with_self: bool) -> ArborResult<Vec<NodeKey>> {
        Ok(self.project_ids(self.descendants(id, with_self)?))
    }

    /// The node named by `id`'s parent field. `None` for roots, unknown ids
    /// and dangling parent references.
    pub fn parent(&self, id: impl Into<NodeKey>) -> Option<&Node> {
        let node = self.get(id)?;
        let parent = self.parent_of(node);
        if parent.is_root() {
            return None;
        }
        self.get(parent)
    }

    /// Ancestor chain of `id`, root first. With `with_self` the node itself
    /// closes the chain. The walk stops at the root sentinel or at a parent
    /// id that matches no row.
    pub fn ancestors(&self, id: impl Into<NodeKey>, with_self: bool) -> ArborResult<Vec<&Node>> {
        let id = id.into();
        let mut chain = Vec::new();
        let Some(node) = self.get(&id) else {
            return Ok(chain);
        };
        if with_self {
            chain.push(node);
        }

        let mut parent = self.parent_of(node);
        let mut depth = 0;
        while !parent.is_root() {
            depth += 1;
            self.check_depth(&parent, depth)?;
            match self.get(&parent) {
                Some(found) => {
                    chain.push(found);
                    parent = self.parent_of(found);
                }
                None => break,
            }
        }

        chain.reverse();
        Ok(chain)
    }

    /// Identifiers of [`Tree::ancestors`], same order
    pub fn ancestor_ids(&self, id: impl Into<NodeKey>, with_self: bool) -> ArborResult<Vec<NodeKey>> {
        Ok(self.project_ids(self.ancestors(id, with_self)?))
    }

    fn project_ids(&self, nodes: Vec<&Node>) -> Vec<NodeKey> {
        nodes.into_iter().filter_map(|node| self.id_of(node)).collect()
    }
}

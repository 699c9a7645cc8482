//! Guide column computation shared by the prefixed renderers
//!
//! For the child at 1-based `position` of `total` siblings under prefix `P`:
//!
//! | sibling  | icon     | continuation (only when `P` is non-empty) |
//! |----------|----------|-------------------------------------------|
//! | last     | corner   | padding                                   |
//! | not last | branch   | vertical                                  |
//!
//! `spacer = P + icon` (empty at the top level, where `P` is empty) and the
//! children of that node are rendered under `P + continuation + padding`.

use crate::config::TreeConfig;

/// Guide output for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Step {
    /// Text drawn in front of the node
    pub spacer: String,
    /// Prefix handed to the node's children
    pub next_prefix: String,
}

pub(crate) fn step(config: &TreeConfig, prefix: &str, position: usize, total: usize) -> Step {
    let icons = &config.icons;
    let (icon, continuation) = if position == total {
        (icons.corner.as_str(), config.padding.as_str())
    } else {
        (icons.branch.as_str(), icons.vertical.as_str())
    };

    if prefix.is_empty() {
        return Step {
            spacer: String::new(),
            next_prefix: config.padding.clone(),
        };
    }

    Step {
        spacer: format!("{}{}", prefix, icon),
        next_prefix: format!("{}{}{}", prefix, continuation, config.padding),
    }
}

/// Recursion state threaded through one render call
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub prefix: String,
    pub depth: usize,
}

impl Frame {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            depth: 0,
        }
    }

    pub fn descend(&self, prefix: String) -> Self {
        Self {
            prefix,
            depth: self.depth + 1,
        }
    }
}

//! Configuration types

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::IconSet;
use crate::error::ArborResult;

use super::loader::{self, ConfigWarning};

/// Structural settings of a tree: field names, guide glyphs, padding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Field holding the node identifier
    #[serde(default = "default_id_field")]
    pub id_field: String,

    /// Field holding the parent identifier
    #[serde(default = "default_parent_field")]
    pub parent_field: String,

    /// Prefix that marks a placeholder in templates
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Indentation unit appended to the guide prefix at every level
    #[serde(default = "default_padding")]
    pub padding: String,

    /// Recursion limit; deeper hierarchies are reported as cycles
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default)]
    pub icons: IconSet,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            id_field: default_id_field(),
            parent_field: default_parent_field(),
            marker: default_marker(),
            padding: default_padding(),
            max_depth: default_max_depth(),
            icons: IconSet::default(),
        }
    }
}

fn default_id_field() -> String {
    "id".to_string()
}

fn default_parent_field() -> String {
    "pid".to_string()
}

fn default_marker() -> String {
    "@".to_string()
}

fn default_padding() -> String {
    "&nbsp;".to_string()
}

fn default_max_depth() -> usize {
    256
}

/// Menu rendering settings supplied by the host application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Render branch items expanded (`treeview-open`)
    #[serde(default)]
    pub submenu_open: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub menu: MenuConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArborResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArborResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the project file, the user file or defaults
    pub fn load_or_default(explicit: Option<&Path>) -> ArborResult<Self> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (ARBOR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

//! Tree guide icons
//!
//! Three glyphs draw the guide column in front of each rendered node:
//! a vertical continuation for ancestors that still have siblings below,
//! a branch for a node followed by siblings and a corner for the last one.

use serde::{Deserialize, Serialize};

pub mod unicode {
    pub const VERTICAL: &str = "│";
    pub const BRANCH: &str = "├";
    pub const CORNER: &str = "└";
}

pub mod ascii {
    pub const VERTICAL: &str = "|";
    pub const BRANCH: &str = "+";
    pub const CORNER: &str = "`";
}

/// The three-glyph icon set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    #[serde(default = "default_vertical")]
    pub vertical: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_corner")]
    pub corner: String,
}

impl IconSet {
    pub fn new(
        vertical: impl Into<String>,
        branch: impl Into<String>,
        corner: impl Into<String>,
    ) -> Self {
        Self {
            vertical: vertical.into(),
            branch: branch.into(),
            corner: corner.into(),
        }
    }

    /// Box-drawing glyphs
    pub fn unicode() -> Self {
        Self::new(unicode::VERTICAL, unicode::BRANCH, unicode::CORNER)
    }

    /// Plain ASCII glyphs
    pub fn ascii() -> Self {
        Self::new(ascii::VERTICAL, ascii::BRANCH, ascii::CORNER)
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::unicode()
    }
}

fn default_vertical() -> String {
    unicode::VERTICAL.to_string()
}

fn default_branch() -> String {
    unicode::BRANCH.to_string()
}

fn default_corner() -> String {
    unicode::CORNER.to_string()
}

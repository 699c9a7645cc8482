use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Arbor - render flat parent-id records as trees, lists and menus
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Node files hold a JSON array of records, or an object whose values are records. Use '-' to read stdin.")]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./arbor.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON node file ('-' for stdin)
    pub nodes: PathBuf,

    /// Parent-id field name (overrides config)
    #[arg(long)]
    pub parent_field: Option<String>,

    /// Indentation unit of the tree guides (overrides config)
    #[arg(long)]
    pub padding: Option<String>,
}

/// Selection state shared by the renderers
#[derive(Args, Debug, Clone, Default)]
pub struct MarkArgs {
    /// Comma-separated ids rendered as selected
    #[arg(long, default_value = "")]
    pub selected: String,

    /// Comma-separated ids rendered as disabled
    #[arg(long, default_value = "")]
    pub disabled: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flat list with tree guides (e.g. <option> rows)
    List {
        #[command(flatten)]
        input: InputArgs,

        /// Render the nodes below this id
        #[arg(long, default_value = "0")]
        root: String,

        /// Item template (defaults to an <option> row)
        #[arg(short, long)]
        template: Option<String>,

        /// Template for roots and nodes with children
        #[arg(long)]
        top_template: Option<String>,

        /// Initial guide prefix
        #[arg(long, default_value = "")]
        prefix: String,

        #[command(flatten)]
        marks: MarkArgs,
    },

    /// Nested markup with children injected at @childlist
    Nested {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value = "0")]
        root: String,

        /// Item template (use @childlist for the children)
        #[arg(short, long)]
        template: String,

        /// Tag wrapping each child group
        #[arg(long, default_value = "ul")]
        wrap_tag: String,

        /// Attributes of the wrapping tag
        #[arg(long, default_value = "")]
        wrap_attr: String,

        #[command(flatten)]
        marks: MarkArgs,
    },

    /// Navigation menu with active/treeview classes
    Menu {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value = "0")]
        root: String,

        /// Item template (@url, @caret, @class are computed)
        #[arg(short, long)]
        template: String,

        #[arg(long, default_value = "ul")]
        wrap_tag: String,

        #[arg(long, default_value = "")]
        wrap_attr: String,

        /// Render branches expanded (overrides config)
        #[arg(long)]
        open: bool,

        #[command(flatten)]
        marks: MarkArgs,
    },

    /// Guided list choosing a template by the @disabled marker
    Special {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value = "0")]
        root: String,

        /// Template for enabled nodes
        #[arg(long)]
        enabled_template: String,

        /// Template for disabled nodes
        #[arg(long)]
        disabled_template: String,

        #[arg(long, default_value = "")]
        prefix: String,

        #[command(flatten)]
        marks: MarkArgs,
    },

    /// Nested JSON array of the hierarchy
    Array {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, default_value = "0")]
        root: String,

        /// Emit one preorder list instead of nested items
        #[arg(long)]
        flatten: bool,

        /// Field prefixed with the spacer when flattening
        #[arg(long, default_value = "name", requires = "flatten")]
        field: String,
    },

    /// Direct children of a node
    Children {
        #[command(flatten)]
        input: InputArgs,

        id: String,
    },

    /// All descendants of a node in preorder
    Descendants {
        #[command(flatten)]
        input: InputArgs,

        id: String,

        /// Put the node itself first
        #[arg(long)]
        with_self: bool,
    },

    /// Ancestor chain of a node, root first
    Ancestors {
        #[command(flatten)]
        input: InputArgs,

        id: String,

        /// Append the node itself
        #[arg(long)]
        with_self: bool,
    },
}

//! Arbor CLI - render flat parent-id records as hierarchies
//!
//! Usage: arbor <COMMAND> <NODES>
//!
//! Commands:
//!   list         Flat list with tree guides
//!   nested       Nested markup
//!   menu         Navigation menu
//!   special      Guided list with enabled/disabled templates
//!   array        Nested or flattened JSON array
//!   children     Direct children of a node
//!   descendants  Preorder descendants of a node
//!   ancestors    Ancestor chain of a node

mod cli;

use std::io;

use anyhow::{Context, Result};
use arbor::{
    Config, IdSet, ListOptions, MenuOptions, NestedOptions, Node, NodeKey, SpecialOptions, Tree,
};
use clap::Parser;
use is_terminal::IsTerminal;

use cli::{Cli, Commands, InputArgs, MarkArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::List {
            input,
            root,
            template,
            top_template,
            prefix,
            marks,
        } => {
            let tree = load_tree(&input, &config)?;
            let mut options = template
                .map(ListOptions::new)
                .unwrap_or_default()
                .prefix(prefix)
                .selected(selected(&marks))
                .disabled(disabled(&marks));
            if let Some(top) = top_template {
                options = options.top_template(top);
            }
            print_text(&tree.render_list(NodeKey::parse(&root), &options)?, cli.json)
        }
        Commands::Nested {
            input,
            root,
            template,
            wrap_tag,
            wrap_attr,
            marks,
        } => {
            let tree = load_tree(&input, &config)?;
            let options = NestedOptions::new(template)
                .wrap(wrap_tag, wrap_attr)
                .selected(selected(&marks))
                .disabled(disabled(&marks));
            print_text(&tree.render_nested(NodeKey::parse(&root), &options)?, cli.json)
        }
        Commands::Menu {
            input,
            root,
            template,
            wrap_tag,
            wrap_attr,
            open,
            marks,
        } => {
            let tree = load_tree(&input, &config)?;
            let options = MenuOptions::new(template)
                .with_config(&config.menu)
                .wrap(wrap_tag, wrap_attr)
                .selected(selected(&marks))
                .disabled(disabled(&marks));
            let options = if open { options.submenu_open(true) } else { options };
            print_text(&tree.render_menu(NodeKey::parse(&root), &options)?, cli.json)
        }
        Commands::Special {
            input,
            root,
            enabled_template,
            disabled_template,
            prefix,
            marks,
        } => {
            let tree = load_tree(&input, &config)?;
            let options = SpecialOptions::new(enabled_template, disabled_template)
                .prefix(prefix)
                .selected(selected(&marks))
                .disabled(disabled(&marks));
            print_text(&tree.render_special(NodeKey::parse(&root), &options)?, cli.json)
        }
        Commands::Array {
            input,
            root,
            flatten,
            field,
        } => cmd_array(&input, &config, &root, flatten.then_some(field.as_str())),
        Commands::Children { input, id } => {
            let tree = load_tree(&input, &config)?;
            print_nodes(&tree, &tree.children(NodeKey::parse(&id)), cli.json)
        }
        Commands::Descendants { input, id, with_self } => {
            let tree = load_tree(&input, &config)?;
            let nodes = tree.descendants(NodeKey::parse(&id), with_self)?;
            print_nodes(&tree, &nodes, cli.json)
        }
        Commands::Ancestors { input, id, with_self } => {
            let tree = load_tree(&input, &config)?;
            let nodes = tree.ancestors(NodeKey::parse(&id), with_self)?;
            print_nodes(&tree, &nodes, cli.json)
        }
    }
}

/// `-v` counts map to warn/info/debug/trace; `RUST_LOG` wins when set.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_tree(input: &InputArgs, config: &Config) -> Result<Tree> {
    let nodes = if input.nodes.as_os_str() == "-" {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("Expected node JSON on stdin (pipe a file or pass a path)");
        }
        arbor::read_nodes(stdin.lock()).context("Failed to read nodes from stdin")?
    } else {
        arbor::load_nodes(&input.nodes)
            .with_context(|| format!("Failed to load nodes from {}", input.nodes.display()))?
    };

    let mut tree = Tree::new(config.tree.clone());
    tree.init(nodes, input.parent_field.as_deref(), input.padding.as_deref());
    Ok(tree)
}

fn selected(marks: &MarkArgs) -> IdSet {
    IdSet::from_csv(&marks.selected)
}

fn disabled(marks: &MarkArgs) -> IdSet {
    IdSet::from_csv(&marks.disabled)
}

fn cmd_array(input: &InputArgs, config: &Config, root: &str, flatten: Option<&str>) -> Result<()> {
    let tree = load_tree(input, config)?;
    let items = tree.build_tree_array(NodeKey::parse(root), "")?;

    let output = match flatten {
        Some(field) => serde_json::to_string_pretty(&tree.flatten_tree(&items, field))?,
        None => serde_json::to_string_pretty(&items)?,
    };
    println!("{}", output);
    Ok(())
}

fn print_text(rendered: &str, json: bool) -> Result<()> {
    if json {
        let output = serde_json::json!({ "output": rendered });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}

fn print_nodes(tree: &Tree, nodes: &[&Node], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(nodes)?);
        return Ok(());
    }

    let id_field = &tree.config().id_field;
    for node in nodes {
        println!("{}", node.text(id_field));
    }
    Ok(())
}

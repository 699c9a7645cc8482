//! Node collections from JSON
//!
//! Accepted shapes:
//!
//! ```json
//! [{"id": 1, "pid": 0, "name": "Root"}, {"id": 2, "pid": 1, "name": "Child"}]
//! ```
//!
//! or a keyed object whose values are the records, taken in document order:
//!
//! ```json
//! {"1": {"id": 1, "pid": 0, "name": "Root"}, "2": {"id": 2, "pid": 1, "name": "Child"}}
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::domain::entities::Node;
use crate::error::{ArborError, ArborResult};

/// Load nodes from a JSON file
pub fn load_nodes(path: &Path) -> ArborResult<Vec<Node>> {
    let content = fs::read_to_string(path)?;
    let nodes = parse_nodes(&content)?;
    debug!("loaded {} nodes from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Read nodes from any reader (stdin in the CLI)
pub fn read_nodes(mut reader: impl Read) -> ArborResult<Vec<Node>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_nodes(&content)
}

/// Parse a JSON node collection
pub fn parse_nodes(content: &str) -> ArborResult<Vec<Node>> {
    let records = match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        other => {
            return Err(ArborError::InvalidNodes {
                message: format!("expected an array or object of records, found {}", kind(&other)),
            })
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record {
            Value::Object(map) => Ok(Node::from(map)),
            other => Err(ArborError::InvalidNodes {
                message: format!("record {} is {}, expected an object", index, kind(&other)),
            }),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

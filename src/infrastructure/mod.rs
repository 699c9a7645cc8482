//! Infrastructure Layer
//!
//! I/O at the edge of the library: reading node collections.

mod nodes_file;

pub use nodes_file::{load_nodes, parse_nodes, read_nodes};

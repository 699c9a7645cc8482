//! Domain Value Objects
//!
//! Immutable value types used across the store and the renderers.

mod icons;
mod id_set;
mod node_key;

pub use icons::IconSet;
pub use id_set::IdSet;
pub use node_key::NodeKey;

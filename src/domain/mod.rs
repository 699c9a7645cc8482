//! Domain Layer
//!
//! Pure data types shared by the store, the template engine and the
//! renderers. Nothing in here touches the file system.
//!
//! ## Structure
//!
//! - `entities/` - records (`Node`, `TreeItem`)
//! - `value_objects/` - immutable values (`NodeKey`, `IdSet`, `IconSet`)

pub mod entities;
pub mod value_objects;

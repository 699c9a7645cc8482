//! Configuration module for Arbor
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (ARBOR_*)
//! 3. Explicit `--config` file, else `./arbor.toml`
//! 4. User config (`<config dir>/arbor/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{parse_with_warnings, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, MenuConfig, TreeConfig};

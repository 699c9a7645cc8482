//! Common test utilities for Arbor contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory for running the `arbor` binary
//! - Fixtures: reusable node collections

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;

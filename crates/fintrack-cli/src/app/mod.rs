//! Application-level utilities for the fintrack CLI.
//!
//! This module provides:
//! - Path resolution and loading for the config file
//! - The starting ledger (empty, demo, or seeded from an export)
//! - `AppContext`, which bundles CLI args with the loaded config

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::initial_ledger;

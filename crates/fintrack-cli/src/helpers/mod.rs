//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Prompting for missing transaction fields (`fields`)
//! - Session line splitting, id, and filter parsing (`parsing`)

mod fields;
mod parsing;

pub use fields::complete_draft;
pub use parsing::{apply_filter_args, describe_filter, overlay_draft, parse_id, split_args};

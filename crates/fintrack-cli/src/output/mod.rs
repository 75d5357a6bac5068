//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying transactions
//! and balances in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::transaction_json;
pub use text::{print_summary, print_transaction, print_transaction_list, transaction_items};

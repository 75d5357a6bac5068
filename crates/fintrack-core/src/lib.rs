//! # Fintrack Core
//!
//! Core library for fintrack - an in-memory income/expense tracker.
//!
//! This crate holds the domain logic independent of the CLI: the ledger of
//! transactions and its edit cursor, filtering, balances, and export payloads.
//!
//! ## Architecture
//!
//! - **transaction**: Records, ids, and validation of raw input
//! - **categories**: The configured set of category labels
//! - **ledger**: Ordered store with add/update/remove and the edit cursor
//! - **filter**: Type, category, and date-range predicates
//! - **balance**: Signed totals over the full ledger
//! - **export**: JSON / JSONL payloads and atomic file writes

pub mod balance;
pub mod categories;
pub mod error;
pub mod export;
pub mod filter;
pub mod fs;
pub mod ledger;
pub mod transaction;

pub use balance::{format_amount, summarize, total_balance, Summary};
pub use categories::CategorySet;
pub use error::{Result, TrackerError};
pub use export::ExportFormat;
pub use filter::TransactionFilter;
pub use ledger::{Ledger, Submitted};
pub use transaction::{
    NewTransaction, Transaction, TransactionDraft, TransactionId, TransactionPatch,
    TransactionType,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

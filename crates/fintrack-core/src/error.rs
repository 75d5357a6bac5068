//! Error types for fintrack core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing notices and exit codes. No error here is fatal: every failing
//! operation leaves the ledger exactly as it was.

use thiserror::Error;

/// Result type alias for fintrack operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Core error type for fintrack operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Update, remove or edit targeted an id that is not in the ledger
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required field is missing or malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Startup configuration (category set) is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing an export payload failed
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Shorthand for a `NotFound` error about a transaction id.
    pub fn transaction_not_found(id: impl std::fmt::Display) -> Self {
        TrackerError::NotFound(format!("transaction {} does not exist", id))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Export(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TrackerError::transaction_not_found(42);
        assert_eq!(err.to_string(), "Not found: transaction 42 does not exist");
    }

    #[test]
    fn test_json_error_maps_to_invalid_input() {
        let err: TrackerError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, TrackerError::InvalidInput(_)));
    }
}

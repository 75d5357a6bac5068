//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so failures at startup and in
//! one-shot commands exit consistently.

use std::fmt;

use fintrack_core::TrackerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file, seed file, transaction)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Configuration could not be loaded
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Config(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Config(_) => exit_codes::CONFIG,
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(core) = cause.downcast_ref::<TrackerError>() {
            return match core {
                TrackerError::NotFound(_) => exit_codes::NOT_FOUND,
                TrackerError::InvalidInput(_) => exit_codes::INVALID_INPUT,
                TrackerError::Config(_) => exit_codes::CONFIG,
                TrackerError::Export(_) => 1,
            };
        }
    }
    1
}

/// Split an error message into its text and a hint, if one applies.
///
/// Explicit `\nHint:` lines win; otherwise common failures get a contextual hint.
pub fn split_hint(message: &str) -> (String, Option<String>) {
    if let Some(idx) = message.find("\nHint:") {
        return (
            message[..idx].to_string(),
            Some(message[idx + 1..].trim_start_matches("Hint:").trim().to_string()),
        );
    }

    let lower = message.to_lowercase();
    let hint = if lower.contains("transaction") && lower.contains("does not exist") {
        Some("Run `list` to see transaction ids.")
    } else if lower.contains("unknown category") {
        Some("Run `categories` to see the configured labels.")
    } else if lower.contains("missing required field") {
        Some("add --date YYYY-MM-DD --amount 12.50 --type Expense --category Groceries")
    } else if lower.contains("invalid date") {
        Some("Dates look like 2023-04-01.")
    } else {
        None
    };
    (message.to_string(), hint.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_exit_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(CliError::invalid_input("x").exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(CliError::config("x").exit_code(), exit_codes::CONFIG);
    }

    #[test]
    fn test_exit_code_through_context() {
        let err = anyhow::Error::new(TrackerError::transaction_not_found(4))
            .context("Failed to delete transaction");
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let err = anyhow::Error::new(CliError::config("bad toml")).context("startup");
        assert_eq!(exit_code_for(&err), exit_codes::CONFIG);
    }

    #[test]
    fn test_unknown_error_is_general_failure() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn test_split_hint_explicit() {
        let (message, hint) = split_hint("Seed file not found: a.json\nHint: check the path");
        assert_eq!(message, "Seed file not found: a.json");
        assert_eq!(hint.as_deref(), Some("check the path"));
    }

    #[test]
    fn test_split_hint_contextual() {
        let (_, hint) = split_hint("Not found: transaction 9 does not exist");
        assert_eq!(hint.as_deref(), Some("Run `list` to see transaction ids."));
        let (_, hint) = split_hint("something else");
        assert!(hint.is_none());
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Seed file not found: a.json", "Hint: check the path");
        assert_eq!(err.to_string(), "Seed file not found: a.json\nHint: check the path");
    }
}

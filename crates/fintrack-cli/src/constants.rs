//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (seed file, transaction).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Configuration could not be loaded.
    pub const CONFIG: i32 = 5;
}

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FINTRACK_LOG";

/// Maximum category width in pretty tables.
pub const CATEGORY_DISPLAY_MAX: usize = 24;

//! Output mode routing logic.

use crate::errors::CliError;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and tables
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// Routing rules:
    /// 1. `--json` overrides everything (exclusive mode)
    /// 2. `--format plain` forces plain, `--format pretty` forces pretty
    /// 3. `TERM=dumb` forces plain
    /// 4. Pretty only when stdout is TTY (`--format table` included)
    /// 5. Default to plain for non-TTY
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> anyhow::Result<Self> {
        if json_flag {
            return Ok(Self::Json);
        }

        match format_flag {
            Some("plain") => return Ok(Self::Plain),
            Some("pretty") => return Ok(Self::Pretty),
            Some("table") | None => {}
            Some(other) => {
                return Err(CliError::invalid_input(format!(
                    "Invalid format: {} (use plain, pretty, or table)",
                    other
                ))
                .into())
            }
        }

        if term_is_dumb {
            return Ok(Self::Plain);
        }

        if is_tty {
            Ok(Self::Pretty)
        } else {
            Ok(Self::Plain)
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

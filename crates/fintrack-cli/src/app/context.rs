//! Application context for the fintrack CLI.
//!
//! Combines CLI arguments with the configuration loaded once at startup.

use std::io::IsTerminal;

use fintrack_core::{CategorySet, ExportFormat};

use crate::cli::Cli;
use crate::config::TrackerConfig;
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::load_config;

/// Application context that bundles CLI args with the tracker configuration.
///
/// This avoids threading config, categories, and flags through every handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: TrackerConfig,
    categories: CategorySet,
    export_format: ExportFormat,
}

impl<'a> AppContext<'a> {
    /// Load configuration and validate it up front.
    ///
    /// Every failure here is a `CliError::Config`.
    pub fn load(cli: &'a Cli) -> anyhow::Result<Self> {
        let config = load_config(cli)?;
        Self::with_config(cli, config)
    }

    pub fn with_config(cli: &'a Cli, config: TrackerConfig) -> anyhow::Result<Self> {
        let categories = config
            .category_set()
            .map_err(|e| CliError::config(format!("{:#}", e)))?;
        let export_format = config
            .export_format()
            .map_err(|e| CliError::config(format!("{:#}", e)))?;
        Ok(Self {
            cli,
            config,
            categories,
            export_format,
        })
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Default format for `export` when none is given.
    pub fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Prompts are allowed: stdin is a terminal and `--no-input` is unset.
    pub fn interactive(&self) -> bool {
        !self.cli.no_input && std::io::stdin().is_terminal()
    }

    /// Build the UI context; `json` adds a per-command `--json`.
    pub fn ui_context(&self, json: bool) -> anyhow::Result<UiContext> {
        let ctx = UiContext::from_env(
            self.cli.json || json,
            self.cli.format.as_deref(),
            self.cli.no_color,
            self.cli.ascii,
        )?;
        Ok(ctx.with_currency_symbol(&self.config.ui.currency_symbol))
    }
}

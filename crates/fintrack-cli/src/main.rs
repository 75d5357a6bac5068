//! Fintrack CLI - track income and expenses in an in-memory session
//!
//! This is the command-line interface for fintrack. It loads the startup
//! configuration, builds the initial ledger, and runs a session that reads
//! one command per line.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{misc, session};
use crate::errors::{exit_code_for, split_hint};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(&cli) {
        let ui_ctx = UiContext::from_env(cli.json, cli.format.as_deref(), cli.no_color, cli.ascii)
            .unwrap_or_default();

        let (message, hint) = split_hint(&format!("{:#}", err));
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Completions need no configuration.
    if let Some(Commands::Completions(args)) = &cli.command {
        return misc::handle_completions(args);
    }

    let ctx = AppContext::load(cli)?;
    tracing::debug!(categories = ctx.categories().len(), "configuration loaded");

    match &cli.command {
        None | Some(Commands::Shell) => session::handle_shell(&ctx)?,
        Some(Commands::Categories) => misc::handle_categories(&ctx)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
    }

    Ok(())
}

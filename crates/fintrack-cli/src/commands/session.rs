//! The interactive session: one command per input line over an in-memory ledger.

use std::io::{self, IsTerminal, Write};

use clap::error::ErrorKind;
use clap::Parser;

use fintrack_core::{Ledger, TransactionFilter};

use crate::app::{initial_ledger, AppContext};
use crate::cli::{SessionCommand, SessionLine};
use crate::errors::split_hint;
use crate::helpers::split_args;
use crate::ui::{hint, print, print_error, UiContext};

use super::{data, misc, transactions, view};

const PROMPT: &str = "fintrack> ";

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session state: the ledger, the list filter, and output settings.
///
/// The filter only shapes what `list` shows; balances always cover the full ledger.
pub struct Session<'a> {
    pub(super) app: &'a AppContext<'a>,
    pub(super) ui: UiContext,
    pub(super) ledger: Ledger,
    pub(super) filter: TransactionFilter,
}

impl<'a> Session<'a> {
    pub fn new(app: &'a AppContext<'a>, ledger: Ledger) -> anyhow::Result<Self> {
        Ok(Self {
            app,
            ui: app.ui_context(false)?,
            ledger,
            filter: TransactionFilter::new(),
        })
    }

    /// UI context for one command; `json` is that command's own `--json`.
    pub(super) fn ui_for(&self, json: bool) -> UiContext {
        if json {
            self.ui.as_json()
        } else {
            self.ui.clone()
        }
    }

    pub(super) fn quiet(&self) -> bool {
        self.app.quiet()
    }

    /// Run until `quit` or end of input.
    ///
    /// Failing commands print an error and the session continues.
    pub fn run<I>(&mut self, lines: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        for line in lines {
            let line = line.map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
            if self.execute_line(&line) == Flow::Quit {
                break;
            }
        }
        tracing::debug!(len = self.ledger.len(), "session finished");
        Ok(())
    }

    /// Execute one input line, reporting any failure.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Flow::Continue;
        }

        let args = match split_args(trimmed) {
            Ok(args) => args,
            Err(err) => {
                self.report(&err);
                return Flow::Continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(&args) {
            Ok(parsed) => parsed,
            Err(err) => {
                match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        print!("{}", err);
                    }
                    _ => {
                        let rendered = err.to_string();
                        let message = rendered
                            .lines()
                            .next()
                            .unwrap_or("invalid command")
                            .trim_start_matches("error: ");
                        print_error(&self.ui, message, Some("Run `help` to list commands."));
                    }
                }
                return Flow::Continue;
            }
        };

        match self.dispatch(parsed.command) {
            Ok(flow) => flow,
            Err(err) => {
                self.report(&err);
                Flow::Continue
            }
        }
    }

    fn report(&self, err: &anyhow::Error) {
        tracing::debug!(error = %format!("{:#}", err), "command failed");
        let (message, error_hint) = split_hint(&format!("{:#}", err));
        print_error(&self.ui, &message, error_hint.as_deref());
    }

    fn dispatch(&mut self, command: SessionCommand) -> anyhow::Result<Flow> {
        match command {
            SessionCommand::Add(args) => transactions::handle_add(self, &args)?,
            SessionCommand::Edit(args) => transactions::handle_edit(self, &args)?,
            SessionCommand::Save(args) => transactions::handle_save(self, &args)?,
            SessionCommand::Cancel => transactions::handle_cancel(self)?,
            SessionCommand::Update(args) => transactions::handle_update(self, &args)?,
            SessionCommand::Delete(args) => transactions::handle_delete(self, &args)?,
            SessionCommand::Show(args) => transactions::handle_show(self, &args)?,
            SessionCommand::Filter(args) => view::handle_filter(self, &args)?,
            SessionCommand::List(args) => view::handle_list(self, &args)?,
            SessionCommand::Balance(args) => view::handle_balance(self, &args)?,
            SessionCommand::Export(args) => data::handle_export(self, &args)?,
            SessionCommand::Import(args) => data::handle_import(self, &args)?,
            SessionCommand::Categories => {
                misc::print_categories(&self.ui, self.app.categories(), self.quiet())?
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Start a session on stdin.
pub fn handle_shell(ctx: &AppContext) -> anyhow::Result<()> {
    let ledger = initial_ledger(ctx.cli(), ctx.categories())?;
    let mut session = Session::new(ctx, ledger)?;

    let interactive = io::stdin().is_terminal();
    if interactive && !ctx.quiet() && !session.ui.mode.is_json() {
        print(
            &session.ui,
            &hint(
                &session.ui,
                &format!(
                    "{} transactions loaded. Type `help` for commands, `quit` to leave.",
                    session.ledger.len()
                ),
            ),
        );
    }

    // Read line by line without holding the stdin lock; prompts read stdin too.
    let lines = std::iter::from_fn(move || {
        if interactive {
            print!("{}", PROMPT);
            let _ = io::stdout().flush();
        }
        let mut buffer = String::new();
        match io::stdin().read_line(&mut buffer) {
            Ok(0) => None,
            Ok(_) => Some(Ok(buffer)),
            Err(err) => Some(Err(err)),
        }
    });
    session.run(lines)
}

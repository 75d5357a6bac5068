use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use fintrack_core::VERSION;

/// Fintrack - track income and expenses in an in-memory session
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "FINTRACK_CONFIG")]
    pub config: Option<String>,

    /// Start the session from an export file
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "demo")]
    pub seed: Option<String>,

    /// Start the session with two sample transactions
    #[arg(long, global = true)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON where supported
    #[arg(long, global = true)]
    pub json: bool,

    /// Output format (plain, pretty, table)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_input: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    Shell,

    /// Show the configured categories
    Categories,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// --- Session commands (one per input line) ---

/// A single line typed into the session.
#[derive(Parser)]
#[command(name = "fintrack", no_binary_name = true)]
#[command(disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Transaction form fields
#[derive(Args, Debug, Clone, Default)]
pub struct TransactionArgs {
    /// Transaction date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Amount (non-negative)
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Income or Expense
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Category label
    #[arg(long)]
    pub category: Option<String>,
}

/// Filter predicates. `all` clears a predicate.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by type (Income, Expense, all)
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Filter by category (or all)
    #[arg(long)]
    pub category: Option<String>,

    /// Start date, inclusive (YYYY-MM-DD or all)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD or all)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

impl FilterArgs {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.category.is_none() && self.from.is_none() && self.to.is_none()
    }
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: TransactionArgs,
}

/// Arguments for the `save` command
#[derive(Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub fields: TransactionArgs,
}

/// Arguments for the `update` command
#[derive(Args)]
pub struct UpdateArgs {
    /// Transaction ID
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub fields: TransactionArgs,
}

/// Arguments for commands that take only a transaction ID
#[derive(Args)]
pub struct IdArgs {
    /// Transaction ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `filter` command
#[derive(Args)]
pub struct FilterCommandArgs {
    /// Clear every predicate
    #[arg(value_parser = ["clear"])]
    pub action: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `balance` command
#[derive(Args)]
pub struct BalanceArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Destination file, or - for stdout
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Output format (json, jsonl)
    #[arg(long)]
    pub format: Option<String>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Export file to load
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Add a transaction
    Add(AddArgs),

    /// Start editing a transaction
    Edit(IdArgs),

    /// Submit the form: update the transaction being edited, or add a new one
    Save(SaveArgs),

    /// Stop editing without changes
    Cancel,

    /// Change fields of a transaction directly
    Update(UpdateArgs),

    /// Delete a transaction
    #[command(alias = "rm")]
    Delete(IdArgs),

    /// Show a single transaction
    Show(IdArgs),

    /// Set, clear, or show the list filter
    Filter(FilterCommandArgs),

    /// List transactions matching the filter, then the total balance
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show the total balance over every transaction
    Balance(BalanceArgs),

    /// Export every transaction (portable formats, you own your data)
    Export(ExportArgs),

    /// Replace the ledger with the contents of an export file
    Import(ImportArgs),

    /// Show the configured categories
    Categories,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

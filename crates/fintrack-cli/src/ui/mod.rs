//! UI primitives for the fintrack CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and the color palette
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: Money, date, and truncation helpers
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{header, simple_table, UiContext};
//!
//! let ctx = UiContext::from_env(cli.json, cli.format.as_deref(), cli.no_color, cli.ascii)?;
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//! println!("{}", header(&ctx, "list", None));
//! println!("{}", simple_table(&ctx, &columns, &rows));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;

pub use render::{
    blank_line, divider, header, hint, kv, print, print_error, receipt, simple_table, table,
    Column,
};

pub use format::{format_date, format_money, truncate};

//! Export and import of the full ledger.

use std::io::Write;
use std::path::{Path, PathBuf};

use fintrack_core::export::{encode, read_export, write_export};
use fintrack_core::ExportFormat;

use crate::cli::{ExportArgs, ImportArgs};
use crate::errors::CliError;
use crate::ui::receipt;

use super::session::Session;

/// Write every transaction, ignoring the list filter.
///
/// `-` writes the payload to stdout.
pub fn handle_export(session: &mut Session, args: &ExportArgs) -> anyhow::Result<()> {
    let format = match args.format.as_deref() {
        Some(value) => value.parse::<ExportFormat>()?,
        None => session.app.export_format(),
    };
    let snapshot = session.ledger.snapshot();

    if args.path.as_deref() == Some("-") {
        let bytes = encode(snapshot, format)?;
        let mut stdout = std::io::stdout();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    let path = args
        .path
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| session.app.config().export_path());
    let bytes = write_export(&path, snapshot, format)?;

    if session.ui.mode.is_json() {
        let output = serde_json::json!({
            "status": "ok",
            "path": path.display().to_string(),
            "count": snapshot.len(),
            "format": format.to_string(),
            "bytes": bytes,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !session.quiet() {
        let path_text = path.display().to_string();
        let count = snapshot.len().to_string();
        let format_text = format.to_string();
        println!(
            "{}",
            receipt(
                &session.ui,
                "Exported transactions",
                &[
                    ("Path", path_text.as_str()),
                    ("Count", count.as_str()),
                    ("Format", format_text.as_str()),
                ],
            )
        );
    }
    Ok(())
}

/// Replace the ledger with the records of an export file.
///
/// The ledger is left untouched if the file does not decode or validate.
pub fn handle_import(session: &mut Session, args: &ImportArgs) -> anyhow::Result<()> {
    let path = Path::new(&args.path);
    if !path.exists() {
        return Err(CliError::not_found(
            format!("Import file not found: {}", path.display()),
            "Hint: Check the path, or create one with `export <PATH>`.",
        )
        .into());
    }
    let records = read_export(path)?;
    session.ledger.restore(records)?;
    tracing::info!(path = %path.display(), len = session.ledger.len(), "ledger imported");

    if session.ui.mode.is_json() {
        let output = serde_json::json!({
            "status": "ok",
            "path": path.display().to_string(),
            "count": session.ledger.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !session.quiet() {
        let path_text = path.display().to_string();
        let count = session.ledger.len().to_string();
        println!(
            "{}",
            receipt(
                &session.ui,
                "Imported transactions",
                &[("Path", path_text.as_str()), ("Count", count.as_str())],
            )
        );
    }
    Ok(())
}

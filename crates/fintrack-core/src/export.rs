//! Export payloads: a lossless, re-parseable serialization of the full ledger.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, TrackerError};
use crate::fs::write_atomic;
use crate::transaction::Transaction;

/// File name used when no export path is configured.
pub const DEFAULT_EXPORT_FILE: &str = "transactions.json";

/// Supported export layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// A single JSON array
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

impl FromStr for ExportFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "jsonl" => Ok(Self::Jsonl),
            other => Err(TrackerError::InvalidInput(format!(
                "Unsupported export format: {} (use json or jsonl)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Jsonl => f.write_str("jsonl"),
        }
    }
}

/// Serialize a ledger snapshot.
///
/// # Errors
///
/// Returns `TrackerError::InvalidInput` if serialization fails.
pub fn encode(transactions: &[Transaction], format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => {
            let mut bytes = serde_json::to_vec_pretty(transactions)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        ExportFormat::Jsonl => {
            let mut bytes = Vec::new();
            for transaction in transactions {
                serde_json::to_writer(&mut bytes, transaction)?;
                bytes.push(b'\n');
            }
            Ok(bytes)
        }
    }
}

/// Parse a payload produced by [`encode`], in either layout.
///
/// # Errors
///
/// Returns `TrackerError::InvalidInput` if the payload is empty or malformed.
pub fn decode(payload: &[u8]) -> Result<Vec<Transaction>> {
    let text = std::str::from_utf8(payload)
        .map_err(|e| TrackerError::InvalidInput(format!("export is not UTF-8: {}", e)))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::InvalidInput(
            "export payload is empty".to_string(),
        ));
    }
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let mut transactions = Vec::new();
    for (index, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let transaction = serde_json::from_str(line).map_err(|e| {
            TrackerError::InvalidInput(format!("line {}: {}", index + 1, e))
        })?;
        transactions.push(transaction);
    }
    Ok(transactions)
}

/// Write a snapshot to `path` atomically. Returns the number of bytes written.
///
/// # Errors
///
/// Returns `TrackerError::Export` if the file cannot be written.
pub fn write_export(path: &Path, transactions: &[Transaction], format: ExportFormat) -> Result<usize> {
    let bytes = encode(transactions, format)?;
    write_atomic(path, &bytes)
        .map_err(|e| TrackerError::Export(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), count = transactions.len(), %format, "ledger exported");
    Ok(bytes.len())
}

/// Read and decode an export file.
///
/// # Errors
///
/// Returns `TrackerError::Export` if the file cannot be read and
/// `TrackerError::InvalidInput` if its contents do not decode.
pub fn read_export(path: &Path) -> Result<Vec<Transaction>> {
    let bytes = std::fs::read(path)
        .map_err(|e| TrackerError::Export(format!("{}: {}", path.display(), e)))?;
    decode(&bytes)
}

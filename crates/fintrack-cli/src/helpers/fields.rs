//! Prompting for transaction form fields.

use chrono::Local;
use dialoguer::{Input, Select};

use fintrack_core::transaction::DATE_FORMAT;
use fintrack_core::{CategorySet, TransactionDraft, TransactionType};

use crate::errors::CliError;

/// Fill in every blank field of `draft`.
///
/// Without a terminal this fails with the list of missing fields instead of
/// prompting. Fields that are already present are never asked for again.
pub fn complete_draft(
    mut draft: TransactionDraft,
    categories: &CategorySet,
    interactive: bool,
) -> anyhow::Result<TransactionDraft> {
    let missing = draft.missing_fields();
    if missing.is_empty() {
        return Ok(draft);
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "missing required field{}: {}",
            if missing.len() == 1 { "" } else { "s" },
            missing.join(", ")
        ))
        .into());
    }

    for field in missing {
        match field {
            "date" => draft.date = Some(prompt_date()?),
            "amount" => draft.amount = Some(prompt_amount()?),
            "type" => draft.kind = Some(prompt_type()?.to_string()),
            "category" => draft.category = Some(prompt_category(categories)?),
            _ => {}
        }
    }
    Ok(draft)
}

fn prompt_date() -> anyhow::Result<String> {
    let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
    Input::<String>::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read date: {}", e))
}

fn prompt_amount() -> anyhow::Result<String> {
    Input::<String>::new()
        .with_prompt("Amount")
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read amount: {}", e))
}

fn prompt_type() -> anyhow::Result<TransactionType> {
    let items: Vec<&str> = TransactionType::ALL.iter().map(|t| t.as_str()).collect();
    let index = Select::new()
        .with_prompt("Type")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read type: {}", e))?;
    Ok(TransactionType::ALL[index])
}

fn prompt_category(categories: &CategorySet) -> anyhow::Result<String> {
    let items = categories.as_slice();
    let index = Select::new()
        .with_prompt("Category")
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read category: {}", e))?;
    Ok(items[index].clone())
}

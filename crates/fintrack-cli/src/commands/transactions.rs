//! Handlers that create, change, or remove transactions.

use fintrack_core::{Submitted, TrackerError, Transaction, TransactionDraft};

use crate::cli::{AddArgs, IdArgs, SaveArgs, UpdateArgs};
use crate::errors::CliError;
use crate::helpers::{complete_draft, overlay_draft, parse_id};
use crate::output::{print_transaction, transaction_items, transaction_json};
use crate::ui::{hint, print, receipt, UiContext};

use super::session::Session;

/// Print a mutation notice ("Transaction added", ...).
fn notice(
    ui: &UiContext,
    quiet: bool,
    title: &str,
    transaction: &Transaction,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        let output = serde_json::json!({
            "status": "ok",
            "message": title,
            "transaction": transaction_json(transaction),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }
    let items = transaction_items(ui, transaction);
    let borrowed: Vec<(&str, &str)> = items.iter().map(|(k, v)| (*k, v.as_str())).collect();
    print(ui, &receipt(ui, title, &borrowed));
    Ok(())
}

pub fn handle_add(session: &mut Session, args: &AddArgs) -> anyhow::Result<()> {
    let categories = session.app.categories();
    let draft = overlay_draft(TransactionDraft::new(), &args.fields);
    let draft = complete_draft(draft, categories, session.app.interactive())?;
    let new = draft.validate(categories)?;

    let record = session.ledger.add(new)?;
    notice(&session.ui, session.quiet(), "Transaction added", &record)
}

pub fn handle_edit(session: &mut Session, args: &IdArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let record = session.ledger.begin_edit(id)?.clone();

    let ui = session.ui_for(args.json);
    if ui.mode.is_json() {
        let output = serde_json::json!({ "editing": transaction_json(&record) });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    print_transaction(&ui, &record, Some(&format!("editing #{}", record.id)));
    if !session.quiet() {
        print(
            &ui,
            &hint(&ui, "`save` with changed fields to apply, `cancel` to discard."),
        );
    }
    Ok(())
}

/// Submit the form: update the record under edit, or add when nothing is being edited.
pub fn handle_save(session: &mut Session, args: &SaveArgs) -> anyhow::Result<()> {
    let categories = session.app.categories();
    let base = session
        .ledger
        .editing()
        .map(TransactionDraft::from_transaction)
        .unwrap_or_default();
    let draft = overlay_draft(base, &args.fields);
    let draft = complete_draft(draft, categories, session.app.interactive())?;
    let new = draft.validate(categories)?;

    let (title, record) = match session.ledger.submit(new)? {
        Submitted::Added(record) => ("Transaction added", record),
        Submitted::Updated(record) => ("Transaction updated", record),
    };
    notice(&session.ui, session.quiet(), title, &record)
}

pub fn handle_cancel(session: &mut Session) -> anyhow::Result<()> {
    let Some(id) = session.ledger.editing().map(|t| t.id) else {
        print(&session.ui, &hint(&session.ui, "Nothing is being edited."));
        return Ok(());
    };
    session.ledger.cancel_edit();

    if session.ui.mode.is_json() {
        let output = serde_json::json!({
            "status": "ok",
            "message": "Edit cancelled",
            "id": id,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !session.quiet() {
        let id = id.to_string();
        print(&session.ui, &receipt(&session.ui, "Edit cancelled", &[("ID", id.as_str())]));
    }
    Ok(())
}

/// Change fields of a transaction directly, without the edit cursor.
pub fn handle_update(session: &mut Session, args: &UpdateArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let draft = overlay_draft(TransactionDraft::new(), &args.fields);
    let patch = draft.validate_patch(session.app.categories())?;
    if patch.is_empty() {
        return Err(CliError::invalid_input(
            "nothing to update (use --date, --amount, --type, or --category)",
        )
        .into());
    }

    let record = session.ledger.update(id, &patch)?;
    notice(&session.ui, session.quiet(), "Transaction updated", &record)
}

pub fn handle_delete(session: &mut Session, args: &IdArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let record = session.ledger.remove(id)?;
    let ui = session.ui_for(args.json);
    notice(&ui, session.quiet(), "Transaction deleted", &record)
}

pub fn handle_show(session: &mut Session, args: &IdArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id)?;
    let record = session
        .ledger
        .get(id)
        .ok_or_else(|| TrackerError::transaction_not_found(id))?;

    let ui = session.ui_for(args.json);
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&transaction_json(record))?);
    } else {
        print_transaction(&ui, record, None);
    }
    Ok(())
}

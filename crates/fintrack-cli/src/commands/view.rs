//! Read-only views: the list filter, the filtered list, and balances.

use fintrack_core::{summarize, TransactionFilter};

use crate::cli::{BalanceArgs, FilterCommandArgs, ListArgs};
use crate::helpers::{apply_filter_args, describe_filter};
use crate::output::{print_summary, print_transaction_list};
use crate::ui::{header, kv, print, receipt, UiContext};

use super::session::Session;

fn filter_items(filter: &TransactionFilter) -> Vec<(&'static str, String)> {
    let or_all = |value: Option<String>| value.unwrap_or_else(|| "all".to_string());
    vec![
        ("Type", or_all(filter.kind.map(|k| k.to_string()))),
        ("Category", or_all(filter.category.clone())),
        ("Date From", or_all(filter.date_from.map(|d| d.to_string()))),
        ("Date To", or_all(filter.date_to.map(|d| d.to_string()))),
    ]
}

fn print_filter(
    ui: &UiContext,
    filter: &TransactionFilter,
    title: Option<&str>,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(filter)?);
        return Ok(());
    }
    let items = filter_items(filter);
    match title {
        Some(title) => {
            let borrowed: Vec<(&str, &str)> =
                items.iter().map(|(k, v)| (*k, v.as_str())).collect();
            print(ui, &receipt(ui, title, &borrowed));
        }
        None => {
            print(ui, &header(ui, "filter", describe_filter(filter).as_deref()));
            for (key, value) in &items {
                print(ui, &kv(ui, key, value));
            }
        }
    }
    Ok(())
}

/// Set, clear, or show the session filter.
pub fn handle_filter(session: &mut Session, args: &FilterCommandArgs) -> anyhow::Result<()> {
    if args.action.as_deref() == Some("clear") {
        session.filter = TransactionFilter::new();
        tracing::debug!("filter cleared");
        return print_filter(&session.ui, &session.filter, Some("Filter cleared"));
    }
    if args.filter.is_empty() {
        return print_filter(&session.ui, &session.filter, None);
    }

    session.filter = apply_filter_args(&session.filter, &args.filter, session.app.categories())?;
    tracing::debug!(filter = ?session.filter, "filter updated");
    print_filter(&session.ui, &session.filter, Some("Filter updated"))
}

/// List the records matching the session filter (overlaid by inline flags),
/// then the balance of the whole ledger.
pub fn handle_list(session: &mut Session, args: &ListArgs) -> anyhow::Result<()> {
    let filter = apply_filter_args(&session.filter, &args.filter, session.app.categories())?;
    let all = session.ledger.snapshot();
    let visible = filter.apply(all);
    let summary = summarize(all);

    let ui = session.ui_for(args.json);
    print_transaction_list(&ui, &visible, &filter, &summary, session.quiet())
}

pub fn handle_balance(session: &mut Session, args: &BalanceArgs) -> anyhow::Result<()> {
    let summary = summarize(session.ledger.snapshot());
    let ui = session.ui_for(args.json);
    print_summary(&ui, &summary, session.quiet())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fintrack_core::TransactionType;

    #[test]
    fn test_filter_items_show_all_for_unset() {
        let filter = TransactionFilter::new()
            .kind(TransactionType::Expense)
            .until(NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
        let items = filter_items(&filter);
        assert_eq!(items[0], ("Type", "Expense".to_string()));
        assert_eq!(items[1], ("Category", "all".to_string()));
        assert_eq!(items[2], ("Date From", "all".to_string()));
        assert_eq!(items[3], ("Date To", "2023-04-30".to_string()));
    }
}

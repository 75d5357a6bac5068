//! JSON output formatting for transactions and balances.

use fintrack_core::{format_amount, Summary, Transaction, TransactionFilter};

use crate::ui::format_date;

/// Convert a transaction to JSON for output.
///
/// Amounts keep full precision here; only text output rounds.
pub fn transaction_json(transaction: &Transaction) -> serde_json::Value {
    serde_json::json!({
        "id": transaction.id,
        "date": format_date(&transaction.date),
        "amount": transaction.amount.to_string(),
        "type": transaction.kind.as_str(),
        "category": transaction.category,
    })
}

/// Convert multiple transactions to a JSON array for output.
pub fn transactions_json(transactions: &[&Transaction]) -> Vec<serde_json::Value> {
    transactions.iter().map(|t| transaction_json(t)).collect()
}

pub fn summary_json(summary: &Summary) -> serde_json::Value {
    serde_json::json!({
        "income": format_amount(summary.income),
        "expense": format_amount(summary.expense),
        "balance": format_amount(summary.balance),
        "count": summary.count,
    })
}

/// The `list` payload: visible rows, the active filter, and the full-ledger balance.
pub fn list_json(
    visible: &[&Transaction],
    filter: &TransactionFilter,
    summary: &Summary,
) -> serde_json::Value {
    serde_json::json!({
        "transactions": transactions_json(visible),
        "filter": filter,
        "balance": format_amount(summary.balance),
        "total_count": summary.count,
    })
}

//! Text and table output formatting for transactions.

use fintrack_core::{format_amount, Summary, Transaction, TransactionFilter, TransactionType};

use super::json::{list_json, summary_json};
use crate::constants::CATEGORY_DISPLAY_MAX;
use crate::helpers::describe_filter;
use crate::ui::theme::{styled, styles};
use crate::ui::{
    blank_line, divider, format_date, format_money, header, hint, kv, print, simple_table,
    truncate, Column, OutputMode, UiContext,
};

/// Amount text for the current mode: currency-prefixed when pretty, bare otherwise.
pub fn amount_text(ctx: &UiContext, amount: rust_decimal::Decimal) -> String {
    if ctx.mode.is_pretty() {
        format_money(amount, &ctx.currency_symbol)
    } else {
        format_amount(amount)
    }
}

/// Receipt items describing one transaction.
pub fn transaction_items(ctx: &UiContext, transaction: &Transaction) -> Vec<(&'static str, String)> {
    vec![
        ("ID", transaction.id.to_string()),
        ("Date", format_date(&transaction.date)),
        ("Amount", amount_text(ctx, transaction.amount)),
        ("Type", transaction.kind.to_string()),
        ("Category", transaction.category.clone()),
    ]
}

/// Quote a plain-mode field that would otherwise split into several words.
///
/// Quoting follows the session's own argument syntax: double quotes, with `"`
/// and `\` escaped by a backslash.
fn plain_field(value: &str) -> String {
    let needs_quotes =
        value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn transaction_row(ctx: &UiContext, transaction: &Transaction) -> Vec<String> {
    let category = if ctx.mode.is_pretty() {
        truncate(&transaction.category, CATEGORY_DISPLAY_MAX)
    } else {
        plain_field(&transaction.category)
    };
    vec![
        transaction.id.to_string(),
        format_date(&transaction.date),
        amount_text(ctx, transaction.amount),
        transaction.kind.to_string(),
        category,
    ]
}

/// Print a single transaction.
pub fn print_transaction(ctx: &UiContext, transaction: &Transaction, title: Option<&str>) {
    if let Some(title) = title {
        print(ctx, &header(ctx, title, None));
    }
    for (key, value) in transaction_items(ctx, transaction) {
        print(ctx, &kv(ctx, key, &value));
    }
}

/// Print the visible rows followed by the balance of the whole ledger.
pub fn print_transaction_list(
    ctx: &UiContext,
    visible: &[&Transaction],
    filter: &TransactionFilter,
    summary: &Summary,
    quiet: bool,
) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            let output = list_json(visible, filter, summary);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputMode::Pretty => {
            if !quiet {
                let description = describe_filter(filter);
                print(ctx, &header(ctx, "transactions", description.as_deref()));
                blank_line(ctx);
            }
            if visible.is_empty() {
                print(ctx, &hint(ctx, "No transactions match."));
            } else {
                let columns = [
                    Column::new("ID"),
                    Column::new("Date"),
                    Column::numeric("Amount"),
                    Column::new("Type"),
                    Column::new("Category"),
                ];
                let rows: Vec<Vec<String>> =
                    visible.iter().map(|t| transaction_row(ctx, t)).collect();
                print(ctx, &simple_table(ctx, &columns, &rows));
            }
            blank_line(ctx);
            print(ctx, &balance_line(ctx, summary));
            if !quiet {
                print(
                    ctx,
                    &hint(
                        ctx,
                        &format!("{} of {} transactions shown", visible.len(), summary.count),
                    ),
                );
            }
        }
        OutputMode::Plain => {
            for transaction in visible {
                println!("{}", transaction_row(ctx, transaction).join(" "));
            }
            println!("balance={}", format_amount(summary.balance));
        }
    }
    Ok(())
}

fn balance_line(ctx: &UiContext, summary: &Summary) -> String {
    let text = format_money(summary.balance, &ctx.currency_symbol);
    let style = if summary.balance.is_sign_negative() && !summary.balance.is_zero() {
        styles::red()
    } else {
        styles::bold()
    };
    kv(ctx, "Balance", &styled(&text, style, ctx.color))
}

/// Print income, expense, and balance totals.
pub fn print_summary(ctx: &UiContext, summary: &Summary, quiet: bool) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&summary_json(summary))?);
        }
        OutputMode::Pretty => {
            if !quiet {
                print(ctx, &header(ctx, "balance", None));
                blank_line(ctx);
            }
            let income = format_money(summary.income, &ctx.currency_symbol);
            let expense = format_money(summary.expense, &ctx.currency_symbol);
            print(
                ctx,
                &kv(
                    ctx,
                    TransactionType::Income.as_str(),
                    &styled(&income, styles::green(), ctx.color),
                ),
            );
            print(
                ctx,
                &kv(
                    ctx,
                    TransactionType::Expense.as_str(),
                    &styled(&expense, styles::red(), ctx.color),
                ),
            );
            print(ctx, &divider(ctx));
            print(ctx, &balance_line(ctx, summary));
            if !quiet {
                print(ctx, &hint(ctx, &format!("{} transactions", summary.count)));
            }
        }
        OutputMode::Plain => {
            println!("income={}", format_amount(summary.income));
            println!("expense={}", format_amount(summary.expense));
            println!("balance={}", format_amount(summary.balance));
            println!("count={}", summary.count);
        }
    }
    Ok(())
}

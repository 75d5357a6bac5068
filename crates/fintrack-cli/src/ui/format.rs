//! String formatting utilities for UI rendering.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fintrack_core::format_amount;
use fintrack_core::transaction::DATE_FORMAT;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Render an amount with a currency prefix, sign first: `-$12.50`.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let text = format_amount(amount);
    match text.strip_prefix('-') {
        Some(magnitude) => format!("-{}{}", symbol, magnitude),
        None => format!("{}{}", symbol, text),
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

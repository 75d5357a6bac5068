//! Parsing helpers for session lines, ids, filters, and form fields.

use fintrack_core::transaction::parse_date;
use fintrack_core::{CategorySet, TransactionDraft, TransactionFilter, TransactionId};

use crate::cli::{FilterArgs, TransactionArgs};

/// Split a session line into arguments.
///
/// Whitespace separates words; single or double quotes group them and a
/// backslash escapes the next character outside single quotes.
pub fn split_args(line: &str) -> anyhow::Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some('\'') => {
                if c == '\'' {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            Some(q) => {
                if c == q {
                    quote = None;
                } else if c == '\\' {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                } else {
                    current.push(c);
                }
            }
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        args.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(anyhow::anyhow!("Unterminated quote in: {}", line.trim()));
    }
    if in_word {
        args.push(current);
    }
    Ok(args)
}

/// Parse a transaction id (`7` or `#7`).
pub fn parse_id(value: &str) -> anyhow::Result<TransactionId> {
    Ok(value.parse::<TransactionId>()?)
}

/// `all` or an empty value unsets a filter predicate.
fn clears(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

/// Overlay filter flags onto `base`. Flags that are absent keep the base predicate.
pub fn apply_filter_args(
    base: &TransactionFilter,
    args: &FilterArgs,
    categories: &CategorySet,
) -> anyhow::Result<TransactionFilter> {
    let mut filter = base.clone();
    if let Some(value) = args.kind.as_deref() {
        filter.kind = if clears(value) {
            None
        } else {
            Some(value.parse()?)
        };
    }
    if let Some(value) = args.category.as_deref() {
        filter.category = if clears(value) {
            None
        } else {
            Some(categories.require(value)?.to_string())
        };
    }
    if let Some(value) = args.from.as_deref() {
        filter.date_from = if clears(value) {
            None
        } else {
            Some(parse_date(value)?)
        };
    }
    if let Some(value) = args.to.as_deref() {
        filter.date_to = if clears(value) {
            None
        } else {
            Some(parse_date(value)?)
        };
    }
    Ok(filter)
}

/// Human summary of the active predicates, e.g. `Expense, Groceries, 2023-04-01..`.
pub fn describe_filter(filter: &TransactionFilter) -> Option<String> {
    if filter.is_empty() {
        return None;
    }
    let mut parts = Vec::new();
    if let Some(kind) = filter.kind {
        parts.push(kind.to_string());
    }
    if let Some(category) = &filter.category {
        parts.push(category.clone());
    }
    match (filter.date_from, filter.date_to) {
        (Some(from), Some(to)) => parts.push(format!("{}..{}", from, to)),
        (Some(from), None) => parts.push(format!("{}..", from)),
        (None, Some(to)) => parts.push(format!("..{}", to)),
        (None, None) => {}
    }
    Some(parts.join(", "))
}

/// Overlay form flags onto a draft. Absent flags keep the draft's value.
pub fn overlay_draft(base: TransactionDraft, args: &TransactionArgs) -> TransactionDraft {
    TransactionDraft {
        date: args.date.clone().or(base.date),
        amount: args.amount.clone().or(base.amount),
        kind: args.kind.clone().or(base.kind),
        category: args.category.clone().or(base.category),
    }
}

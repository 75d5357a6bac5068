//! Multi-predicate filtering over the ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::transaction::{Transaction, TransactionType};

/// Filter for selecting the visible subset of transactions.
///
/// Every predicate is optional; an unset predicate matches everything.
/// Date bounds are inclusive and compared as calendar dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Filter by income/expense
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,

    /// Filter by category label
    pub category: Option<String>,

    /// Start date (inclusive)
    pub date_from: Option<NaiveDate>,

    /// End date (inclusive)
    pub date_to: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Whether a single record passes every predicate.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if &transaction.category != category {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if transaction.date > to {
                return false;
            }
        }
        true
    }

    /// The matching records in their original order.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionId;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction {
                id: TransactionId(1),
                date: date("2023-04-01"),
                amount: dec!(200.0),
                kind: TransactionType::Income,
                category: "Salary".to_string(),
            },
            Transaction {
                id: TransactionId(2),
                date: date("2023-04-02"),
                amount: dec!(50.0),
                kind: TransactionType::Expense,
                category: "Groceries".to_string(),
            },
            Transaction {
                id: TransactionId(3),
                date: date("2023-05-10"),
                amount: dec!(12.5),
                kind: TransactionType::Expense,
                category: "Bills".to_string(),
            },
        ]
    }

    fn ids(found: &[&Transaction]) -> Vec<u64> {
        found.iter().map(|t| t.id.0).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = ledger();
        let filter = TransactionFilter::new();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&records)), vec![1, 2, 3]);
    }

    #[test]
    fn test_type_filter() {
        let records = ledger();
        let filter = TransactionFilter::new().kind(TransactionType::Expense);
        assert_eq!(ids(&filter.apply(&records)), vec![2, 3]);
    }

    #[test]
    fn test_category_filter() {
        let records = ledger();
        let filter = TransactionFilter::new().category("Groceries");
        assert_eq!(ids(&filter.apply(&records)), vec![2]);
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let records = ledger();
        let filter = TransactionFilter::new()
            .since(date("2023-04-02"))
            .until(date("2023-05-10"));
        assert_eq!(ids(&filter.apply(&records)), vec![2, 3]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let records = ledger();
        let filter = TransactionFilter::new()
            .since(date("2023-05-01"))
            .until(date("2023-04-01"));
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn test_combined_predicates() {
        let records = ledger();
        let filter = TransactionFilter::new()
            .kind(TransactionType::Expense)
            .until(date("2023-04-30"));
        assert_eq!(ids(&filter.apply(&records)), vec![2]);
    }
}

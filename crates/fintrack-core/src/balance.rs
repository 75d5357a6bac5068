//! Balance calculation over the full ledger.
//!
//! Callers pass the unfiltered snapshot: the balance reflects every record,
//! whatever filter is being displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::transaction::{Transaction, TransactionType};

/// Signed sum of every transaction: income adds, expenses subtract.
pub fn total_balance(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc + t.signed_amount())
}

/// Per-type totals alongside the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub count: usize,
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            TransactionType::Income => income += t.amount,
            TransactionType::Expense => expense += t.amount,
        }
    }
    Summary {
        income,
        expense,
        balance: income - expense,
        count: transactions.len(),
    }
}

/// Round to cents for display (half away from zero) and always show two places.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tx(id: u64, amount: Decimal, kind: TransactionType) -> Transaction {
        Transaction {
            id: TransactionId(id),
            date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            amount,
            kind,
            category: "Misc".to_string(),
        }
    }

    #[test]
    fn test_empty_balance_is_zero() {
        assert_eq!(total_balance(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_balance_signs() {
        let records = vec![
            tx(1, dec!(200.0), TransactionType::Income),
            tx(2, dec!(50.0), TransactionType::Expense),
        ];
        assert_eq!(total_balance(&records), dec!(150.0));
    }

    #[test]
    fn test_balance_is_exact() {
        let records = vec![
            tx(1, dec!(0.1), TransactionType::Income),
            tx(2, dec!(0.2), TransactionType::Income),
        ];
        assert_eq!(total_balance(&records), dec!(0.3));
    }

    #[test]
    fn test_summary() {
        let records = vec![
            tx(1, dec!(200), TransactionType::Income),
            tx(2, dec!(50), TransactionType::Expense),
            tx(3, dec!(25.5), TransactionType::Expense),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.income, dec!(200));
        assert_eq!(summary.expense, dec!(75.5));
        assert_eq!(summary.balance, total_balance(&records));
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(150)), "150.00");
        assert_eq!(format_amount(dec!(10.005)), "10.01");
        assert_eq!(format_amount(dec!(-0.005)), "-0.01");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
        assert_eq!(format_amount(dec!(1234.5)), "1234.50");
    }
}

//! Transaction records and the typed input that produces them.
//!
//! A [`Transaction`] only ever enters the ledger through a [`NewTransaction`],
//! and a [`NewTransaction`] only exists once its fields have been validated.
//! Raw form input arrives as a [`TransactionDraft`] of optional strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::CategorySet;
use crate::error::{Result, TrackerError};

/// Date layout used for input, display and export.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ledger-unique transaction identifier.
///
/// Assigned by the ledger on creation and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed
            .parse::<u64>()
            .map(TransactionId)
            .map_err(|_| TrackerError::InvalidInput(format!("invalid transaction id: {}", s)))
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// Multiplier applied to the amount when computing a balance.
    pub fn sign(&self) -> Decimal {
        match self {
            Self::Income => Decimal::ONE,
            Self::Expense => Decimal::NEGATIVE_ONE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TrackerError::InvalidInput(format!(
                "invalid type \"{}\" (expected Income or Expense)",
                s.trim()
            ))),
        }
    }
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub date: NaiveDate,

    /// Full precision; rounding happens only when displayed
    pub amount: Decimal,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: String,
}

impl Transaction {
    pub(crate) fn from_new(id: TransactionId, new: NewTransaction) -> Self {
        Self {
            id,
            date: new.date,
            amount: new.amount,
            kind: new.kind,
            category: new.category,
        }
    }

    /// `+amount` for income, `-amount` for expenses.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.sign() * self.amount
    }

    /// The record's fields without its id.
    pub fn fields(&self) -> NewTransaction {
        NewTransaction {
            date: self.date,
            amount: self.amount,
            kind: self.kind,
            category: self.category.clone(),
        }
    }
}

/// A validated transaction that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub(crate) date: NaiveDate,
    pub(crate) amount: Decimal,
    pub(crate) kind: TransactionType,
    pub(crate) category: String,
}

impl NewTransaction {
    /// Typed constructor.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the amount is negative or the
    /// category is not part of `categories`.
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        kind: TransactionType,
        category: &str,
        categories: &CategorySet,
    ) -> Result<Self> {
        let amount = check_amount(amount)?;
        let category = categories.require(category)?.to_string();
        Ok(Self {
            date,
            amount,
            kind,
            category,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Replacement values for an existing transaction; `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub(crate) date: Option<NaiveDate>,
    pub(crate) amount: Option<Decimal>,
    pub(crate) kind: Option<TransactionType>,
    pub(crate) category: Option<String>,
}

impl TransactionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for a negative amount.
    pub fn amount(mut self, amount: Decimal) -> Result<Self> {
        self.amount = Some(check_amount(amount)?);
        Ok(self)
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` for a category outside `categories`.
    pub fn category(mut self, category: &str, categories: &CategorySet) -> Result<Self> {
        self.category = Some(categories.require(category)?.to_string());
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.amount.is_none() && self.kind.is_none() && self.category.is_none()
    }

    /// Overlay the patch onto existing fields.
    pub fn apply_to(&self, base: &NewTransaction) -> NewTransaction {
        NewTransaction {
            date: self.date.unwrap_or(base.date),
            amount: self.amount.unwrap_or(base.amount),
            kind: self.kind.unwrap_or(base.kind),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| base.category.clone()),
        }
    }
}

impl From<NewTransaction> for TransactionPatch {
    fn from(new: NewTransaction) -> Self {
        Self {
            date: Some(new.date),
            amount: Some(new.amount),
            kind: Some(new.kind),
            category: Some(new.category),
        }
    }
}

/// Raw, string-typed form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill every field from an existing record.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            date: Some(transaction.date.format(DATE_FORMAT).to_string()),
            amount: Some(transaction.amount.to_string()),
            kind: Some(transaction.kind.to_string()),
            category: Some(transaction.category.clone()),
        }
    }

    /// Names of required fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("date", &self.date),
            ("amount", &self.amount),
            ("type", &self.kind),
            ("category", &self.category),
        ]
        .into_iter()
        .filter(|(_, value)| blank(value))
        .map(|(name, _)| name)
        .collect()
    }

    /// Parse every field, requiring all of them.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` naming the first problem found.
    /// Nothing is returned partially.
    pub fn validate(&self, categories: &CategorySet) -> Result<NewTransaction> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(TrackerError::InvalidInput(format!(
                "missing required field{}: {}",
                if missing.len() == 1 { "" } else { "s" },
                missing.join(", ")
            )));
        }
        let patch = self.validate_patch(categories)?;
        match (patch.date, patch.amount, patch.kind, patch.category) {
            (Some(date), Some(amount), Some(kind), Some(category)) => Ok(NewTransaction {
                date,
                amount,
                kind,
                category,
            }),
            _ => Err(TrackerError::InvalidInput(
                "incomplete transaction".to_string(),
            )),
        }
    }

    /// Parse only the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if a present field is malformed.
    pub fn validate_patch(&self, categories: &CategorySet) -> Result<TransactionPatch> {
        let mut patch = TransactionPatch::new();
        if let Some(value) = present(&self.date) {
            patch = patch.date(parse_date(value)?);
        }
        if let Some(value) = present(&self.amount) {
            patch = patch.amount(parse_amount(value)?)?;
        }
        if let Some(value) = present(&self.kind) {
            patch = patch.kind(value.parse()?);
        }
        if let Some(value) = present(&self.category) {
            patch = patch.category(value, categories)?;
        }
        Ok(patch)
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn check_amount(amount: Decimal) -> Result<Decimal> {
    if amount < Decimal::ZERO {
        return Err(TrackerError::InvalidInput(format!(
            "amount must not be negative: {}",
            amount
        )));
    }
    Ok(amount)
}

/// Parse a calendar date (`YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its date).
///
/// # Errors
///
/// Returns `TrackerError::InvalidInput` if the value is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.date_naive());
    }
    Err(TrackerError::InvalidInput(format!(
        "invalid date (expected YYYY-MM-DD): {}",
        value
    )))
}

/// Parse a non-negative decimal amount.
///
/// # Errors
///
/// Returns `TrackerError::InvalidInput` if the value is not a number or is negative.
pub fn parse_amount(value: &str) -> Result<Decimal> {
    let value = value.trim();
    let amount = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| TrackerError::InvalidInput(format!("invalid amount: {}", value)))?;
    check_amount(amount)
}

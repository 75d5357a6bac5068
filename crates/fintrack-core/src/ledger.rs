//! The ledger store: an ordered, in-memory sequence of transactions plus the
//! edit cursor.
//!
//! Ordering is insertion order. `update` and `replace` keep a record at its
//! position, `remove` takes it out. Ids come from a monotonic counter and are
//! never reused during the lifetime of a store, even after deletion.

use std::collections::HashSet;

use crate::categories::CategorySet;
use crate::error::{Result, TrackerError};
use crate::transaction::{NewTransaction, Transaction, TransactionId, TransactionPatch};

/// Ordered collection of transactions with at most one record under edit.
#[derive(Debug, Clone)]
pub struct Ledger {
    categories: CategorySet,
    records: Vec<Transaction>,
    next_id: u64,
    editing: Option<TransactionId>,
}

impl Ledger {
    /// Create an empty ledger bound to a category set.
    pub fn new(categories: CategorySet) -> Self {
        Self {
            categories,
            records: Vec::new(),
            next_id: 1,
            editing: None,
        }
    }

    /// Create a ledger seeded with existing records, keeping their ids and order.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if two records share an id, an
    /// amount is negative, a category is not configured, or an id is
    /// `u64::MAX` (the counter would have nowhere to go).
    pub fn with_transactions(categories: CategorySet, records: Vec<Transaction>) -> Result<Self> {
        let mut ledger = Self::new(categories);
        ledger.restore(records)?;
        Ok(ledger)
    }

    /// Replace the whole ledger with `records`, clearing the edit cursor.
    ///
    /// The id counter continues after the largest id seen so far, so ids handed
    /// out before the restore are not reissued. On error the ledger is untouched.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Ledger::with_transactions`].
    pub fn restore(&mut self, records: Vec<Transaction>) -> Result<()> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut validated = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                return Err(TrackerError::InvalidInput(format!(
                    "duplicate transaction id {}",
                    record.id
                )));
            }
            let fields = NewTransaction::new(
                record.date,
                record.amount,
                record.kind,
                &record.category,
                &self.categories,
            )?;
            validated.push(Transaction::from_new(record.id, fields));
        }

        let max_id = validated.iter().map(|t| t.id.0).max().unwrap_or(0);
        let after_max = max_id.checked_add(1).ok_or_else(|| {
            TrackerError::InvalidInput(format!(
                "transaction id {} leaves no room for new ids",
                max_id
            ))
        })?;
        self.next_id = self.next_id.max(after_max);
        self.records = validated;
        self.editing = None;
        tracing::debug!(len = self.records.len(), next_id = self.next_id, "ledger restored");
        Ok(())
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Read-only view of every record, in ledger order.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TransactionId) -> Result<usize> {
        self.records
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TrackerError::transaction_not_found(id))
    }

    fn allocate_id(&mut self) -> Result<TransactionId> {
        let next = self.next_id.checked_add(1).ok_or_else(|| {
            TrackerError::InvalidInput("no transaction ids left to allocate".to_string())
        })?;
        let id = TransactionId(self.next_id);
        self.next_id = next;
        Ok(id)
    }

    /// Append a new record with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the id counter is exhausted; the
    /// ledger is unchanged.
    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction> {
        let id = self.allocate_id()?;
        let record = Transaction::from_new(id, new);
        self.records.push(record.clone());
        tracing::debug!(%id, len = self.records.len(), "transaction added");
        Ok(record)
    }

    /// Apply a partial update in place. Id and position are preserved.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::NotFound` if no record has `id`.
    pub fn update(&mut self, id: TransactionId, patch: &TransactionPatch) -> Result<Transaction> {
        let index = self.position(id)?;
        let merged = patch.apply_to(&self.records[index].fields());
        Ok(self.write_at(index, merged))
    }

    /// Replace every field of a record in place. Id and position are preserved.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::NotFound` if no record has `id`.
    pub fn replace(&mut self, id: TransactionId, new: NewTransaction) -> Result<Transaction> {
        let index = self.position(id)?;
        Ok(self.write_at(index, new))
    }

    fn write_at(&mut self, index: usize, fields: NewTransaction) -> Transaction {
        let id = self.records[index].id;
        let record = Transaction::from_new(id, fields);
        self.records[index] = record.clone();
        tracing::debug!(%id, index, "transaction updated");
        record
    }

    /// Remove a record.
    ///
    /// Removal is strict: an unknown id is an error and the ledger is left
    /// unchanged. Removing the record under edit clears the edit cursor.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::NotFound` if no record has `id`.
    pub fn remove(&mut self, id: TransactionId) -> Result<Transaction> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        tracing::debug!(%id, len = self.records.len(), "transaction removed");
        Ok(removed)
    }

    // --- Edit cursor ---

    /// Point the edit cursor at an existing record.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::NotFound` if no record has `id`; the cursor is
    /// left as it was.
    pub fn begin_edit(&mut self, id: TransactionId) -> Result<&Transaction> {
        let index = self.position(id)?;
        self.editing = Some(id);
        Ok(&self.records[index])
    }

    /// Clear the edit cursor. The ledger is not touched.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The record currently under edit, as it is in the ledger right now.
    pub fn editing(&self) -> Option<&Transaction> {
        self.editing.and_then(|id| self.get(id))
    }

    /// Submit a complete form.
    ///
    /// With an active cursor the record under edit is replaced; otherwise a new
    /// record is added. The cursor is cleared on success only.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::NotFound` if the record under edit no longer
    /// exists, or the errors of [`Ledger::add`].
    pub fn submit(&mut self, new: NewTransaction) -> Result<Submitted> {
        match self.editing {
            Some(id) => {
                let record = self.replace(id, new)?;
                self.editing = None;
                Ok(Submitted::Updated(record))
            }
            None => {
                let record = self.add(new)?;
                Ok(Submitted::Added(record))
            }
        }
    }
}

/// Outcome of [`Ledger::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Added(Transaction),
    Updated(Transaction),
}

impl Submitted {
    pub fn transaction(&self) -> &Transaction {
        match self {
            Self::Added(t) | Self::Updated(t) => t,
        }
    }
}

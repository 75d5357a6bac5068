//! The finite set of category labels a transaction may carry.
//!
//! The set is supplied once at startup (from configuration or the built-in
//! defaults) and never changes during a session.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

/// Labels used when no configuration overrides them.
pub const DEFAULT_CATEGORIES: &[&str] = &["Groceries", "Bills", "Salary", "Entertainment", "Misc"];

/// Ordered, de-duplicated, non-empty list of category labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Build a set from configured labels.
    ///
    /// Labels are trimmed. Duplicates keep their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Config` if the list is empty or a label is blank.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            let trimmed = label.trim();
            if trimmed.is_empty() {
                return Err(TrackerError::Config(
                    "category labels must not be blank".to_string(),
                ));
            }
            if !unique.iter().any(|existing| existing == trimmed) {
                unique.push(trimmed.to_string());
            }
        }
        if unique.is_empty() {
            return Err(TrackerError::Config(
                "at least one category must be configured".to_string(),
            ));
        }
        Ok(Self { labels: unique })
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    /// Map user input onto its canonical label, ignoring case.
    pub fn resolve(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.labels
            .iter()
            .find(|existing| existing.eq_ignore_ascii_case(wanted))
            .map(String::as_str)
    }

    /// Like [`CategorySet::resolve`], but fails with `InvalidInput`.
    pub fn require(&self, label: &str) -> Result<&str> {
        self.resolve(label).ok_or_else(|| {
            TrackerError::InvalidInput(format!(
                "unknown category \"{}\" (expected one of: {})",
                label.trim(),
                self.labels.join(", ")
            ))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = TrackerError;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.labels
    }
}

//! Expense repository
//!
//! Persists the expense collection as a plain JSON array in `expenses.json`.
//! The collection is append-only and the whole array is rewritten on save.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Expense, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for expense entries
pub struct ExpenseRepository {
    path: PathBuf,
    entries: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk, replacing the in-memory collection
    pub fn load(&self) -> FintrackResult<()> {
        let loaded: Vec<Expense> = read_json(&self.path)?;

        let mut entries = self
            .entries
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *entries = loaded;

        Ok(())
    }

    /// Save the entire collection to disk
    pub fn save(&self) -> FintrackResult<()> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*entries)
    }

    /// Append an expense entry (in memory; call `save` to persist)
    pub fn append(&self, expense: Expense) -> FintrackResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.push(expense);
        Ok(())
    }

    /// Get all entries in insertion order
    pub fn get_all(&self) -> FintrackResult<Vec<Expense>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Sum of all expense amounts
    pub fn total(&self) -> FintrackResult<Money> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().map(|e| e.amount).sum())
    }

    /// Number of entries
    pub fn len(&self) -> FintrackResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }

    /// Check whether any expense in the given category is dated `date`
    ///
    /// The recurring pass keys on this to avoid materializing a template's
    /// expense twice in one day.
    pub fn has_category_on(&self, category: &str, date: NaiveDate) -> FintrackResult<bool> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries
            .iter()
            .any(|e| e.category == category && e.date == date))
    }

    /// Get all expenses in the given category, in insertion order
    pub fn in_category(&self, category: &str) -> FintrackResult<Vec<Expense>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect())
    }
}

//! Income repository
//!
//! Persists the income collection as a plain JSON array in `incomes.json`.
//! The collection is append-only and the whole array is rewritten on save.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Income, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for income entries
pub struct IncomeRepository {
    path: PathBuf,
    entries: RwLock<Vec<Income>>,
}

impl IncomeRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Load entries from disk, replacing the in-memory collection
    pub fn load(&self) -> FintrackResult<()> {
        let loaded: Vec<Income> = read_json(&self.path)?;

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

    /// Append an income entry (in memory; call `save` to persist)
    pub fn append(&self, income: Income) -> FintrackResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.push(income);
        Ok(())
    }

    /// Get all entries in insertion order
    pub fn get_all(&self) -> FintrackResult<Vec<Income>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }

    /// Sum of all income amounts
    pub fn total(&self) -> FintrackResult<Money> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().map(|i| i.amount).sum())
    }

    /// Number of entries
    pub fn len(&self) -> FintrackResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.len())
    }
}

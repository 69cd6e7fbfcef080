//! Recurring expense template repository
//!
//! Persists the template collection as a plain JSON array in `recurring.json`.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{FintrackError, FintrackResult};
use crate::models::RecurringExpense;

use super::file_io::{read_json, write_json_atomic};

/// Repository for recurring expense templates
pub struct RecurringRepository {
    path: PathBuf,
    templates: RwLock<Vec<RecurringExpense>>,
}

impl RecurringRepository {
    /// Create a new repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            templates: RwLock::new(Vec::new()),
        }
    }

    /// Load templates from disk, replacing the in-memory collection
    pub fn load(&self) -> FintrackResult<()> {
        let loaded: Vec<RecurringExpense> = read_json(&self.path)?;

        let mut templates = self
            .templates
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *templates = loaded;

        Ok(())
    }

    /// Save the entire collection to disk
    pub fn save(&self) -> FintrackResult<()> {
        let templates = self
            .templates
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*templates)
    }

    /// Append a template (in memory; call `save` to persist)
    pub fn append(&self, template: RecurringExpense) -> FintrackResult<()> {
        let mut templates = self
            .templates
            .write()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        templates.push(template);
        Ok(())
    }

    /// Get all templates in insertion order
    pub fn get_all(&self) -> FintrackResult<Vec<RecurringExpense>> {
        let templates = self
            .templates
            .read()
            .map_err(|e| FintrackError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(templates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_append_and_get_all() {
        let temp_dir = TempDir::new().unwrap();
        let repo = RecurringRepository::new(temp_dir.path().join("recurring.json"));

        repo.append(RecurringExpense::new(Money::from_cents(999), "Streaming", "fun", date(2025, 1, 1)))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, "Streaming");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recurring.json");

        {
            let repo = RecurringRepository::new(path.clone());
            repo.append(RecurringExpense::new(Money::from_cents(999), "Streaming", "", date(2025, 1, 1)))
                .unwrap();
            repo.save().unwrap();
        }

        {
            let repo = RecurringRepository::new(path);
            repo.load().unwrap();
            assert_eq!(repo.get_all().unwrap().len(), 1);
        }
    }
}

//! Income service
//!
//! Business logic for logging income entries. Every successful append is
//! persisted immediately.

use chrono::NaiveDate;

use crate::error::FintrackResult;
use crate::models::{Income, Money};
use crate::storage::Storage;

/// Service for income operations
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append an income entry, flushing the collection to disk
    pub fn add(&self, amount: Money, source: &str, date: NaiveDate) -> FintrackResult<Income> {
        let income = Income::new(amount, source.trim(), date);
        income.validate()?;

        self.storage.incomes.append(income.clone())?;
        self.storage.incomes.save()?;

        Ok(income)
    }

    /// All income entries in insertion order
    pub fn list(&self) -> FintrackResult<Vec<Income>> {
        self.storage.incomes.get_all()
    }

    /// Total of all income amounts
    pub fn total(&self) -> FintrackResult<Money> {
        self.storage.incomes.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_increases_total_by_exact_amount() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        let before = service.total().unwrap();
        service
            .add(Money::from_cents(123_45), "Salary", date(2025, 8, 1))
            .unwrap();
        let after = service.total().unwrap();

        assert_eq!((after - before).cents(), 123_45);
    }

    #[test]
    fn test_add_persists_immediately() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        service
            .add(Money::from_cents(5000), "Gift", date(2025, 8, 20))
            .unwrap();

        // A fresh repository over the same file sees the entry
        let reloaded = crate::storage::IncomeRepository::new(storage.paths().incomes_file());
        reloaded.load().unwrap();
        assert_eq!(reloaded.len().unwrap(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_entries() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        assert!(service.add(Money::zero(), "Salary", date(2025, 8, 1)).is_err());
        assert!(service
            .add(Money::from_cents(100), "  ", date(2025, 8, 1))
            .is_err());
        assert_eq!(service.list().unwrap().len(), 0);
    }

    #[test]
    fn test_source_is_trimmed() {
        let (_temp_dir, storage) = test_storage();
        let service = IncomeService::new(&storage);

        let income = service
            .add(Money::from_cents(100), "  Salary  ", date(2025, 8, 1))
            .unwrap();
        assert_eq!(income.source, "Salary");
    }
}

//! Recurring expense materialization
//!
//! On each program start, every template whose category has no expense dated
//! today gets one expense appended for today. The check keys on category and
//! date, so a template never materializes twice in one day, and a manually
//! logged expense in the same category also suppresses the template for that
//! day.

use chrono::NaiveDate;

use crate::error::FintrackResult;
use crate::models::RecurringExpense;
use crate::storage::Storage;

/// Service for the recurring expense pass
pub struct RecurringService<'a> {
    storage: &'a Storage,
}

impl<'a> RecurringService<'a> {
    /// Create a new service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Materialize due templates for the given day
    ///
    /// Returns the number of expenses appended. The expense collection is
    /// flushed once after the pass when anything was appended.
    pub fn materialize_due(&self, today: NaiveDate) -> FintrackResult<usize> {
        let templates = self.storage.recurring.get_all()?;
        let mut added = 0;

        for template in templates {
            if self
                .storage
                .expenses
                .has_category_on(&template.category, today)?
            {
                continue;
            }
            self.storage.expenses.append(template.materialize(today))?;
            added += 1;
        }

        if added > 0 {
            self.storage.expenses.save()?;
        }

        Ok(added)
    }

    /// All templates in insertion order
    pub fn list(&self) -> FintrackResult<Vec<RecurringExpense>> {
        self.storage.recurring.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{Expense, Money};
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
    fn test_materializes_due_template() {
        let (_temp_dir, storage) = test_storage();
        storage
            .recurring
            .append(RecurringExpense::new(Money::from_cents(999), "Streaming", "fun", date(2025, 1, 1)))
            .unwrap();

        let service = RecurringService::new(&storage);
        let added = service.materialize_due(date(2025, 8, 29)).unwrap();
        assert_eq!(added, 1);

        let expenses = storage.expenses.get_all().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "Streaming");
        assert_eq!(expenses[0].date, date(2025, 8, 29));
    }

    #[test]
    fn test_never_materializes_twice_in_one_day() {
        let (_temp_dir, storage) = test_storage();
        storage
            .recurring
            .append(RecurringExpense::new(Money::from_cents(999), "Streaming", "", date(2025, 1, 1)))
            .unwrap();

        let service = RecurringService::new(&storage);
        assert_eq!(service.materialize_due(date(2025, 8, 29)).unwrap(), 1);
        assert_eq!(service.materialize_due(date(2025, 8, 29)).unwrap(), 0);

        assert_eq!(storage.expenses.len().unwrap(), 1);
    }

    #[test]
    fn test_manual_expense_suppresses_template() {
        let (_temp_dir, storage) = test_storage();
        storage
            .expenses
            .append(Expense::new(Money::from_cents(500), "Streaming", "", date(2025, 8, 29)))
            .unwrap();
        storage
            .recurring
            .append(RecurringExpense::new(Money::from_cents(999), "Streaming", "", date(2025, 1, 1)))
            .unwrap();

        let service = RecurringService::new(&storage);
        assert_eq!(service.materialize_due(date(2025, 8, 29)).unwrap(), 0);
        assert_eq!(storage.expenses.len().unwrap(), 1);
    }

    #[test]
    fn test_same_category_templates_materialize_once() {
        let (_temp_dir, storage) = test_storage();
        storage
            .recurring
            .append(RecurringExpense::new(Money::from_cents(999), "Streaming", "", date(2025, 1, 1)))
            .unwrap();
        storage
            .recurring
            .append(RecurringExpense::new(Money::from_cents(499), "Streaming", "", date(2025, 2, 1)))
            .unwrap();

        // The second template sees the first one's expense and is skipped
        let service = RecurringService::new(&storage);
        assert_eq!(service.materialize_due(date(2025, 8, 29)).unwrap(), 1);
    }

    #[test]
    fn test_next_day_materializes_again() {
        let (_temp_dir, storage) = test_storage();
        storage
            .recurring
            .append(RecurringExpense::new(Money::from_cents(999), "Streaming", "", date(2025, 1, 1)))
            .unwrap();

        let service = RecurringService::new(&storage);
        assert_eq!(service.materialize_due(date(2025, 8, 29)).unwrap(), 1);
        assert_eq!(service.materialize_due(date(2025, 8, 30)).unwrap(), 1);
        assert_eq!(storage.expenses.len().unwrap(), 2);
    }

    #[test]
    fn test_pass_flushes_to_disk() {
        let (_temp_dir, storage) = test_storage();
        storage
            .recurring
            .append(RecurringExpense::new(Money::from_cents(999), "Streaming", "", date(2025, 1, 1)))
            .unwrap();

        let service = RecurringService::new(&storage);
        service.materialize_due(date(2025, 8, 29)).unwrap();

        let reloaded = crate::storage::ExpenseRepository::new(storage.paths().expenses_file());
        reloaded.load().unwrap();
        assert_eq!(reloaded.len().unwrap(), 1);
    }
}

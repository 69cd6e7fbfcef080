//! Expense service
//!
//! Business logic for logging expense entries. An expense marked as
//! recurring additionally appends a template whose start date is the
//! expense date. Every successful append is persisted immediately.

use chrono::NaiveDate;

use crate::error::FintrackResult;
use crate::models::{Expense, Money, RecurringExpense};
use crate::storage::Storage;

/// Service for expense operations
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append an expense entry, flushing the collection to disk
    ///
    /// When `recurring` is set, a template derived from the expense is
    /// appended to the recurring collection and flushed as well.
    pub fn add(
        &self,
        amount: Money,
        category: &str,
        tag: &str,
        date: NaiveDate,
        recurring: bool,
    ) -> FintrackResult<Expense> {
        let expense = Expense::new(amount, category.trim(), tag.trim(), date);
        expense.validate()?;

        self.storage.expenses.append(expense.clone())?;
        self.storage.expenses.save()?;

        if recurring {
            self.storage
                .recurring
                .append(RecurringExpense::from(&expense))?;
            self.storage.recurring.save()?;
        }

        Ok(expense)
    }

    /// All expense entries in insertion order
    pub fn list(&self) -> FintrackResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Total of all expense amounts
    pub fn total(&self) -> FintrackResult<Money> {
        self.storage.expenses.total()
    }
}

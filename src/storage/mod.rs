//! Storage layer for FinTrack
//!
//! Three independently keyed JSON array files (incomes, expenses, recurring
//! templates) with atomic whole-file writes. Each collection is read at
//! startup and overwritten wholesale on every mutation.

pub mod expenses;
pub mod file_io;
pub mod incomes;
pub mod recurring;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use incomes::IncomeRepository;
pub use recurring::RecurringRepository;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FintrackPaths,
    pub incomes: IncomeRepository,
    pub expenses: ExpenseRepository,
    pub recurring: RecurringRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            incomes: IncomeRepository::new(paths.incomes_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            recurring: RecurringRepository::new(paths.recurring_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all collections from disk
    pub fn load_all(&mut self) -> FintrackResult<()> {
        self.incomes.load()?;
        self.expenses.load()?;
        self.recurring.load()?;
        Ok(())
    }
}

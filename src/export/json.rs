//! JSON export
//!
//! Writes the full database (all three collections) as one JSON document.

use std::io::Write;

use serde::Serialize;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Expense, Income, RecurringExpense};
use crate::storage::Storage;

/// Snapshot of the full database for export
#[derive(Debug, Serialize)]
pub struct FullExport {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub recurring: Vec<RecurringExpense>,
}

impl FullExport {
    /// Collect all collections from storage
    pub fn collect(storage: &Storage) -> FintrackResult<Self> {
        Ok(Self {
            incomes: storage.incomes.get_all()?,
            expenses: storage.expenses.get_all()?,
            recurring: storage.recurring.get_all()?,
        })
    }
}

/// Export the full database as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FintrackResult<()> {
    let export = FullExport::collect(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    } else {
        serde_json::to_writer(writer, &export)
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_full_json() {
        let (_temp_dir, storage) = test_storage();
        storage
            .incomes
            .append(Income::new(
                Money::from_cents(100_000),
                "Salary",
                NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            ))
            .unwrap();

        let mut buf = Vec::new();
        export_full_json(&storage, &mut buf, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["incomes"].as_array().unwrap().len(), 1);
        assert_eq!(value["expenses"].as_array().unwrap().len(), 0);
        assert_eq!(value["recurring"].as_array().unwrap().len(), 0);
    }
}

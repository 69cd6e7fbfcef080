//! CSV export
//!
//! Writes both collections as a single delimited stream with a fixed
//! five-column header. Income rows leave the tag column blank.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::storage::Storage;

/// Export incomes and expenses to CSV
///
/// Columns: `Type,Amount,Category/Source,Tag,Date`. Amounts are written
/// with two decimal places and no currency symbol.
pub fn export_records_csv<W: Write>(storage: &Storage, writer: W) -> FintrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Type", "Amount", "Category/Source", "Tag", "Date"])
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for income in storage.incomes.get_all()? {
        let amount = income.amount.plain();
        let date = income.date.format("%Y-%m-%d").to_string();
        csv_writer
            .write_record(["Income", amount.as_str(), income.source.as_str(), "", date.as_str()])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    for expense in storage.expenses.get_all()? {
        let amount = expense.amount.plain();
        let date = expense.date.format("%Y-%m-%d").to_string();
        csv_writer
            .write_record([
                "Expense",
                amount.as_str(),
                expense.category.as_str(),
                expense.tag.as_str(),
                date.as_str(),
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{Expense, Income, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let (_temp_dir, storage) = test_storage();
        storage
            .incomes
            .append(Income::new(Money::from_cents(100_050), "Salary", date(2025, 8, 1)))
            .unwrap();
        storage
            .expenses
            .append(Expense::new(Money::from_cents(4_500), "Groceries", "food", date(2025, 8, 29)))
            .unwrap();

        let mut buf = Vec::new();
        export_records_csv(&storage, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Type,Amount,Category/Source,Tag,Date"));
        assert_eq!(lines.next(), Some("Income,1000.50,Salary,,2025-08-01"));
        assert_eq!(lines.next(), Some("Expense,45.00,Groceries,food,2025-08-29"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let (_temp_dir, storage) = test_storage();
        storage
            .expenses
            .append(Expense::new(
                Money::from_cents(2_000),
                "Dining, Out",
                "",
                date(2025, 8, 29),
            ))
            .unwrap();

        let mut buf = Vec::new();
        export_records_csv(&storage, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("\"Dining, Out\""));
    }

    #[test]
    fn test_round_trips_sum_per_type() {
        let (_temp_dir, storage) = test_storage();
        storage
            .incomes
            .append(Income::new(Money::from_cents(100_000), "Salary", date(2025, 8, 1)))
            .unwrap();
        storage
            .incomes
            .append(Income::new(Money::from_cents(25_050), "Freelance", date(2025, 8, 10)))
            .unwrap();
        storage
            .expenses
            .append(Expense::new(Money::from_cents(4_500), "Groceries", "", date(2025, 8, 29)))
            .unwrap();
        storage
            .expenses
            .append(Expense::new(Money::from_cents(999), "Streaming", "", date(2025, 8, 29)))
            .unwrap();

        let mut buf = Vec::new();
        export_records_csv(&storage, &mut buf).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let mut income_sum = Money::zero();
        let mut expense_sum = Money::zero();
        for record in reader.records() {
            let record = record.unwrap();
            let amount = Money::parse(&record[1]).unwrap();
            match &record[0] {
                "Income" => income_sum += amount,
                "Expense" => expense_sum += amount,
                other => panic!("unexpected type column: {}", other),
            }
        }

        assert_eq!(income_sum, storage.incomes.total().unwrap());
        assert_eq!(expense_sum, storage.expenses.total().unwrap());
    }
}

//! Expense entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{FintrackError, FintrackResult};

/// A logged expense entry
///
/// Entries are append-only; identity is positional within the expense
/// collection. The tag is free-form and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Money,
    pub category: String,
    #[serde(default)]
    pub tag: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense entry
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        tag: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            tag: tag.into(),
            date,
        }
    }

    /// Validate the entry before it is appended
    pub fn validate(&self) -> FintrackResult<()> {
        if !self.amount.is_positive() {
            return Err(FintrackError::Validation(
                "Expense amount must be positive".into(),
            ));
        }
        if self.category.trim().is_empty() {
            return Err(FintrackError::Validation(
                "Expense category cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Check whether this expense falls in the given month ("YYYY-MM")
    pub fn in_month(&self, month: &str) -> bool {
        self.date.format("%Y-%m").to_string() == month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(Money::from_cents(4500), "Groceries", "food", date(2025, 8, 29));
        assert_eq!(expense.amount.cents(), 4500);
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.tag, "food");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_empty_tag_is_valid() {
        let expense = Expense::new(Money::from_cents(4500), "Groceries", "", date(2025, 8, 29));
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_category() {
        let expense = Expense::new(Money::from_cents(4500), "", "food", date(2025, 8, 29));
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_in_month() {
        let expense = Expense::new(Money::from_cents(4500), "Groceries", "", date(2025, 8, 29));
        assert!(expense.in_month("2025-08"));
        assert!(!expense.in_month("2025-07"));
        assert!(!expense.in_month("2024-08"));
    }

    #[test]
    fn test_tag_defaults_on_deserialize() {
        let json = r#"{"amount":4500,"category":"Groceries","date":"2025-08-29"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.tag.is_empty());
    }
}

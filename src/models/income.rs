//! Income entry model
//!
//! A single logged income: how much, where it came from, and when.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{FintrackError, FintrackResult};

/// A logged income entry
///
/// Entries are append-only; there is no update or delete path. Identity is
/// positional within the income collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: Money,
    pub source: String,
    pub date: NaiveDate,
}

impl Income {
    /// Create a new income entry
    pub fn new(amount: Money, source: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            source: source.into(),
            date,
        }
    }

    /// Validate the entry before it is appended
    pub fn validate(&self) -> FintrackResult<()> {
        if !self.amount.is_positive() {
            return Err(FintrackError::Validation(
                "Income amount must be positive".into(),
            ));
        }
        if self.source.trim().is_empty() {
            return Err(FintrackError::Validation(
                "Income source cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_income() {
        let income = Income::new(Money::from_cents(500000), "Salary", date(2025, 8, 1));
        assert_eq!(income.amount.cents(), 500000);
        assert_eq!(income.source, "Salary");
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let income = Income::new(Money::zero(), "Salary", date(2025, 8, 1));
        assert!(income.validate().is_err());

        let income = Income::new(Money::from_cents(-100), "Salary", date(2025, 8, 1));
        assert!(income.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_source() {
        let income = Income::new(Money::from_cents(100), "   ", date(2025, 8, 1));
        assert!(income.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let income = Income::new(Money::from_cents(1050), "Freelance", date(2025, 8, 15));
        let json = serde_json::to_string(&income).unwrap();
        let back: Income = serde_json::from_str(&json).unwrap();
        assert_eq!(income, back);
    }
}

//! CLI command handlers
//!
//! Bridges clap argument parsing with the service and report layers.

pub mod chart;
pub mod dashboard;
pub mod expense;
pub mod export;
pub mod income;
pub mod recurring;

pub use chart::handle_chart_command;
pub use dashboard::handle_dashboard_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};

use chrono::{Local, NaiveDate};

use crate::error::{FintrackError, FintrackResult};
use crate::models::Money;

/// Parse a YYYY-MM-DD date argument, defaulting to today when absent
pub fn parse_entry_date(input: Option<&str>) -> FintrackResult<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            FintrackError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse an amount argument into Money
pub fn parse_amount(input: &str) -> FintrackResult<Money> {
    Money::parse(input)
        .map_err(|e| FintrackError::Validation(format!("Invalid amount: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_date() {
        let date = parse_entry_date(Some("2025-08-29")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 29).unwrap());

        assert!(parse_entry_date(Some("29/08/2025")).is_err());
        assert!(parse_entry_date(Some("not a date")).is_err());
    }

    #[test]
    fn test_parse_entry_date_defaults_to_today() {
        let date = parse_entry_date(None).unwrap();
        assert_eq!(date, Local::now().date_naive());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("45.50").unwrap().cents(), 4550);
        assert!(parse_amount("lots").is_err());
    }
}

//! Recurring expense template model
//!
//! A template is a rule that, once present, causes an expense to be
//! auto-appended for the current day if none yet exists for its category
//! that day. Templates are created alongside an expense when the user marks
//! it as recurring.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::money::Money;

/// A recurring expense template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringExpense {
    pub amount: Money,
    pub category: String,
    #[serde(default)]
    pub tag: String,
    pub start_date: NaiveDate,
}

impl RecurringExpense {
    /// Create a new template starting on the given date
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        tag: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            tag: tag.into(),
            start_date,
        }
    }

    /// Build the expense this template materializes for a given day
    pub fn materialize(&self, date: NaiveDate) -> Expense {
        Expense::new(self.amount, self.category.clone(), self.tag.clone(), date)
    }
}

impl From<&Expense> for RecurringExpense {
    /// Derive a template from an expense marked as recurring; the expense
    /// date becomes the template's start date.
    fn from(expense: &Expense) -> Self {
        Self {
            amount: expense.amount,
            category: expense.category.clone(),
            tag: expense.tag.clone(),
            start_date: expense.date,
        }
    }
}

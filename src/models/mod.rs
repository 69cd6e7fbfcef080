//! Core data models
//!
//! The three record types the tracker persists (incomes, expenses, recurring
//! expense templates) plus the `Money` type they share.

pub mod expense;
pub mod income;
pub mod money;
pub mod recurring;

pub use expense::Expense;
pub use income::Income;
pub use money::{Money, MoneyParseError};
pub use recurring::RecurringExpense;

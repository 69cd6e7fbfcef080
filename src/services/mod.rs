//! Business logic layer
//!
//! Services validate entries, append them to the repositories, and keep the
//! on-disk collections flushed after every mutation.

pub mod expense;
pub mod income;
pub mod recurring;

pub use expense::ExpenseService;
pub use income::IncomeService;
pub use recurring::RecurringService;

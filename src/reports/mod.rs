//! Aggregation reports
//!
//! The dashboard summary and the category breakdown chart.

pub mod breakdown;
pub mod dashboard;

pub use breakdown::{category_transactions, format_category_transactions, CategoryBreakdown};
pub use dashboard::{DashboardReport, EntryKind, RecentEntry};

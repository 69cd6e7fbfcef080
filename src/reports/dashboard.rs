//! Dashboard report
//!
//! Aggregates both collections into totals, savings, and the most recent
//! transactions by date descending.

use chrono::NaiveDate;

use crate::display::{double_separator, separator};
use crate::error::FintrackResult;
use crate::models::Money;
use crate::storage::Storage;

/// Which collection a recent entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    fn label(&self) -> &'static str {
        match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        }
    }
}

/// A single line of the recent-transactions list
#[derive(Debug, Clone)]
pub struct RecentEntry {
    pub kind: EntryKind,
    pub amount: Money,
    /// Income source or expense category
    pub label: String,
    pub date: NaiveDate,
}

/// Dashboard report over the full data set
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub total_income: Money,
    pub total_expenses: Money,
    pub savings: Money,
    /// Most recent transactions, date descending, at most `recent_limit`
    pub recent: Vec<RecentEntry>,
}

impl DashboardReport {
    /// Generate the report
    pub fn generate(storage: &Storage, recent_limit: usize) -> FintrackResult<Self> {
        let incomes = storage.incomes.get_all()?;
        let expenses = storage.expenses.get_all()?;

        let total_income: Money = incomes.iter().map(|i| i.amount).sum();
        let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
        let savings = total_income - total_expenses;

        let mut recent: Vec<RecentEntry> = incomes
            .iter()
            .map(|i| RecentEntry {
                kind: EntryKind::Income,
                amount: i.amount,
                label: i.source.clone(),
                date: i.date,
            })
            .chain(expenses.iter().map(|e| RecentEntry {
                kind: EntryKind::Expense,
                amount: e.amount,
                label: e.category.clone(),
                date: e.date,
            }))
            .collect();

        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(recent_limit);

        Ok(Self {
            total_income,
            total_expenses,
            savings,
            recent,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&double_separator(40));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:   {:>14}\n",
            self.total_income.with_symbol(currency)
        ));
        output.push_str(&format!(
            "Total Expenses: {:>14}\n",
            self.total_expenses.with_symbol(currency)
        ));
        output.push_str(&format!(
            "Savings:        {:>14}\n",
            self.savings.with_symbol(currency)
        ));
        output.push('\n');

        output.push_str("Recent Transactions\n");
        output.push_str(&separator(40));
        output.push('\n');

        if self.recent.is_empty() {
            output.push_str("No transactions yet.\n");
        } else {
            for entry in &self.recent {
                output.push_str(&format!(
                    "{}  {:7} {:>12}  {}\n",
                    entry.date.format("%Y-%m-%d"),
                    entry.kind.label(),
                    entry.amount.with_symbol(currency),
                    entry.label
                ));
            }
        }

        output
    }
}

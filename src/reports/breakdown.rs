//! Category breakdown report
//!
//! Groups expenses by category, optionally filtered by month, and renders a
//! terminal bar chart with per-category totals and percentages. Drill-down
//! lists all transactions of one category regardless of the month filter,
//! matching the dashboard chart's click behavior.

use std::collections::HashMap;

use crate::display::{format_bar, format_percentage, separator, truncate};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

const BAR_WIDTH: usize = 20;

/// One category's share of spending
#[derive(Debug, Clone)]
pub struct CategorySlice {
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Share of the (filtered) expense total, 0-100
    pub percentage: f64,
}

/// Expense breakdown by category
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Month filter that was applied ("YYYY-MM"), if any
    pub month: Option<String>,
    /// Slices sorted by total descending
    pub slices: Vec<CategorySlice>,
    pub total: Money,
}

impl CategoryBreakdown {
    /// Generate the breakdown, optionally restricted to one month
    pub fn generate(storage: &Storage, month: Option<&str>) -> FintrackResult<Self> {
        if let Some(m) = month {
            validate_month(m)?;
        }

        let expenses = storage.expenses.get_all()?;
        let filtered: Vec<&Expense> = match month {
            Some(m) => expenses.iter().filter(|e| e.in_month(m)).collect(),
            None => expenses.iter().collect(),
        };

        let mut by_category: HashMap<String, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();
        for expense in &filtered {
            let entry = by_category
                .entry(expense.category.clone())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
            total += expense.amount;
        }

        let mut slices: Vec<CategorySlice> = by_category
            .into_iter()
            .map(|(category, (cat_total, count))| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (cat_total.cents() as f64 / total.cents() as f64) * 100.0
                };
                CategorySlice {
                    category,
                    total: cat_total,
                    count,
                    percentage,
                }
            })
            .collect();

        // Largest share first; name breaks ties so output is deterministic
        slices.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Ok(Self {
            month: month.map(String::from),
            slices,
            total,
        })
    }

    /// Format the breakdown as a terminal bar chart
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        match &self.month {
            Some(m) => output.push_str(&format!("Expense Breakdown ({})\n", m)),
            None => output.push_str("Expense Breakdown\n"),
        }
        output.push_str(&separator(60));
        output.push('\n');

        if self.slices.is_empty() {
            output.push_str("No expenses to chart.\n");
            return output;
        }

        let max_cents = self
            .slices
            .iter()
            .map(|s| s.total.cents())
            .max()
            .unwrap_or(0) as f64;

        for slice in &self.slices {
            output.push_str(&format!(
                "{:<16} {:>12} {:>6}  {}\n",
                truncate(&slice.category, 16),
                slice.total.with_symbol(currency),
                format_percentage(slice.percentage),
                format_bar(slice.total.cents() as f64, max_cents, BAR_WIDTH)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>12}\n",
            "Total",
            self.total.with_symbol(currency)
        ));

        output
    }
}

/// List one category's transactions (the chart's drill-down view)
pub fn category_transactions(storage: &Storage, category: &str) -> FintrackResult<Vec<Expense>> {
    storage.expenses.in_category(category)
}

/// Format the drill-down listing for terminal display
pub fn format_category_transactions(
    category: &str,
    expenses: &[Expense],
    currency: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} Transactions\n", category));
    output.push_str(&separator(40));
    output.push('\n');

    if expenses.is_empty() {
        output.push_str("No transactions in this category.\n");
        return output;
    }

    for expense in expenses {
        if expense.tag.is_empty() {
            output.push_str(&format!(
                "{} on {}\n",
                expense.amount.with_symbol(currency),
                expense.date.format("%Y-%m-%d")
            ));
        } else {
            output.push_str(&format!(
                "{} on {} [{}]\n",
                expense.amount.with_symbol(currency),
                expense.date.format("%Y-%m-%d"),
                expense.tag
            ));
        }
    }

    output
}

/// Validate a "YYYY-MM" month filter string
fn validate_month(month: &str) -> FintrackResult<()> {
    let valid = chrono::NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_ok()
        && month.len() == 7;
    if valid {
        Ok(())
    } else {
        Err(FintrackError::Validation(format!(
            "Invalid month filter '{}': expected YYYY-MM",
            month
        )))
    }
}

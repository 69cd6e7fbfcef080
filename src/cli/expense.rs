//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{parse_amount, parse_entry_date};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log an expense entry
    Add {
        /// Amount (e.g., "45" or "45.00")
        amount: String,

        /// Expense category (e.g., "Groceries")
        category: String,

        /// Free-form tag
        #[arg(short, long, default_value = "")]
        tag: String,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Also create a recurring template for this expense
        #[arg(short, long)]
        recurring: bool,
    },

    /// List logged expense entries
    List {
        /// Show at most this many entries (most recent first)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only show entries in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FintrackResult<()> {
    let service = ExpenseService::new(storage);
    let currency = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            tag,
            date,
            recurring,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_entry_date(date.as_deref())?;

            let expense = service.add(amount, &category, &tag, date, recurring)?;

            println!(
                "Expense added: {} for {} on {}",
                expense.amount.with_symbol(currency),
                expense.category,
                expense.date.format(&settings.date_format)
            );
            if recurring {
                println!(
                    "Recurring template created; it will log {} for {} each day.",
                    expense.amount.with_symbol(currency),
                    expense.category
                );
            }
        }

        ExpenseCommands::List { limit, category } => {
            let mut expenses = service.list()?;
            if let Some(ref cat) = category {
                expenses.retain(|e| &e.category == cat);
            }
            if expenses.is_empty() {
                println!("No expense entries found.");
                return Ok(());
            }

            expenses.sort_by(|a, b| b.date.cmp(&a.date));
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            println!("{:10}  {:>12}  {:16}  Tag", "Date", "Amount", "Category");
            println!("{}", "-".repeat(56));
            let mut shown_total = crate::models::Money::zero();
            for expense in &expenses {
                shown_total += expense.amount;
                println!(
                    "{}  {:>12}  {:16}  {}",
                    expense.date.format("%Y-%m-%d"),
                    expense.amount.with_symbol(currency),
                    expense.category,
                    expense.tag
                );
            }
            println!("{}", "-".repeat(56));
            println!("Total shown: {}", shown_total.with_symbol(currency));
        }
    }

    Ok(())
}

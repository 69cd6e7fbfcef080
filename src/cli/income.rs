//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::services::IncomeService;
use crate::storage::Storage;

use super::{parse_amount, parse_entry_date};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Log an income entry
    Add {
        /// Amount (e.g., "2500" or "2500.00")
        amount: String,

        /// Where the income came from (e.g., "Salary")
        source: String,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List logged income entries
    List {
        /// Show at most this many entries (most recent first)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> FintrackResult<()> {
    let service = IncomeService::new(storage);
    let currency = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_entry_date(date.as_deref())?;

            let income = service.add(amount, &source, date)?;

            println!(
                "Income added: {} from {} on {}",
                income.amount.with_symbol(currency),
                income.source,
                income.date.format(&settings.date_format)
            );
        }

        IncomeCommands::List { limit } => {
            let mut incomes = service.list()?;
            if incomes.is_empty() {
                println!("No income entries yet.");
                return Ok(());
            }

            incomes.sort_by(|a, b| b.date.cmp(&a.date));
            if let Some(limit) = limit {
                incomes.truncate(limit);
            }

            println!("{:10}  {:>12}  Source", "Date", "Amount");
            println!("{}", "-".repeat(40));
            for income in &incomes {
                println!(
                    "{}  {:>12}  {}",
                    income.date.format("%Y-%m-%d"),
                    income.amount.with_symbol(currency),
                    income.source
                );
            }
            println!("{}", "-".repeat(40));
            println!("Total: {}", service.total()?.with_symbol(currency));
        }
    }

    Ok(())
}

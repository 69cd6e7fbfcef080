use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_chart_command, handle_dashboard_command, handle_expense_command,
    handle_export_command, handle_income_command, handle_recurring_command, ExpenseCommands,
    ExportFormat, IncomeCommands, RecurringCommands,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::services::RecurringService;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Command-line personal finance tracker",
    long_about = "FinTrack logs income and expense entries, shows aggregated \
                  dashboard totals and a category breakdown chart, and exports \
                  records to CSV, JSON, or YAML. All data is stored locally."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income management commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Recurring expense template commands
    #[command(subcommand, alias = "rec")]
    Recurring(RecurringCommands),

    /// Show totals, savings, and recent transactions
    #[command(alias = "dash")]
    Dashboard,

    /// Show the expense breakdown by category
    Chart {
        /// Only chart expenses in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// List one category's transactions instead of the chart
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Export records to a file
    Export {
        /// Output file path
        #[arg(default_value = "expenses.csv")]
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    // Materialize due recurring expenses before handling any command, so
    // every view of the data already includes today's entries.
    let added = RecurringService::new(&storage).materialize_due(Local::now().date_naive())?;
    if added > 0 {
        println!("Logged {} recurring expense(s) for today.", added);
    }

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, &settings)?;
        }
        Some(Commands::Chart { month, category }) => {
            handle_chart_command(&storage, &settings, month, category)?;
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            handle_export_command(&storage, output, format, pretty)?;
        }
        Some(Commands::Config) => {
            println!("FinTrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Recent limit:      {}", settings.recent_limit);
            println!(
                "  Savings milestone: {}",
                settings
                    .savings_milestone
                    .with_symbol(&settings.currency_symbol)
            );
        }
        None => {
            println!("FinTrack - command-line personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' to see your totals.");
        }
    }

    Ok(())
}

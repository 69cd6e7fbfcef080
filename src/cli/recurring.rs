//! Recurring template CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::services::RecurringService;
use crate::storage::Storage;

/// Recurring template subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// List recurring expense templates
    List,
}

/// Handle a recurring command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> FintrackResult<()> {
    let service = RecurringService::new(storage);

    match cmd {
        RecurringCommands::List => {
            let templates = service.list()?;
            if templates.is_empty() {
                println!("No recurring expense templates.");
                println!("Use 'fintrack expense add --recurring' to create one.");
                return Ok(());
            }

            println!("{:>12}  {:16}  {:12}  Since", "Amount", "Category", "Tag");
            println!("{}", "-".repeat(56));
            for template in &templates {
                println!(
                    "{:>12}  {:16}  {:12}  {}",
                    template.amount.with_symbol(&settings.currency_symbol),
                    template.category,
                    template.tag,
                    template.start_date.format("%Y-%m-%d")
                );
            }
        }
    }

    Ok(())
}

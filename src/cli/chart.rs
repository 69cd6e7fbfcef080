//! Chart CLI command
//!
//! Renders the category breakdown chart, or the drill-down listing when a
//! category is given.

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::reports::{category_transactions, format_category_transactions, CategoryBreakdown};
use crate::storage::Storage;

/// Handle the chart command
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    category: Option<String>,
) -> FintrackResult<()> {
    let currency = &settings.currency_symbol;

    if let Some(category) = category {
        // Drill-down lists the whole category, not just the filtered month
        let expenses = category_transactions(storage, &category)?;
        print!(
            "{}",
            format_category_transactions(&category, &expenses, currency)
        );
        return Ok(());
    }

    let breakdown = CategoryBreakdown::generate(storage, month.as_deref())?;
    print!("{}", breakdown.format_terminal(currency));

    Ok(())
}

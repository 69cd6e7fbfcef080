//! Dashboard CLI command

use crate::config::Settings;
use crate::error::FintrackResult;
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Handle the dashboard command
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> FintrackResult<()> {
    let report = DashboardReport::generate(storage, settings.recent_limit)?;

    print!("{}", report.format_terminal(&settings.currency_symbol));

    if report.savings >= settings.savings_milestone && report.savings.is_positive() {
        println!();
        println!(
            "Great job! You have saved {} so far.",
            report.savings.with_symbol(&settings.currency_symbol)
        );
    }

    Ok(())
}

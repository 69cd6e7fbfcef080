//! User settings for FinTrack
//!
//! Manages display preferences and the savings milestone threshold. Settings
//! are stored as `config.json` in the base directory and created with
//! defaults on first run.

use serde::{Deserialize, Serialize};

use super::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::Money;
use crate::storage::file_io::{read_json_optional, write_json_atomic};

/// User settings for FinTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many entries the dashboard's recent-transactions list shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Savings level that triggers the congratulation line on the dashboard
    #[serde(default = "default_savings_milestone")]
    pub savings_milestone: Money,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_savings_milestone() -> Money {
    Money::from_cents(100_000) // 1000.00
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_limit: default_recent_limit(),
            savings_milestone: default_savings_milestone(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let path = paths.settings_file();
        match read_json_optional::<Settings, _>(&path)? {
            Some(settings) => Ok(settings),
            None => {
                paths.ensure_directories()?;
                let settings = Settings::default();
                settings.save(paths)?;
                Ok(settings)
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

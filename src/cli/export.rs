//! Export CLI command
//!
//! Writes records to a file in the chosen format.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_full_json, export_full_yaml, export_records_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV record stream (incomes and expenses)
    Csv,
    /// JSON full database
    Json,
    /// YAML full database
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> FintrackResult<()> {
    let file = File::create(&output).map_err(|e| {
        FintrackError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            export_records_csv(storage, &mut writer)?;
            println!("Records exported to: {}", output.display());
        }
        ExportFormat::Json => {
            export_full_json(storage, &mut writer, pretty)?;
            println!("Full database exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_full_yaml(storage, &mut writer)?;
            println!("Full database exported to: {}", output.display());
        }
    }

    Ok(())
}

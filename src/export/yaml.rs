//! YAML export
//!
//! Human-readable full-database export.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::storage::Storage;

use super::json::FullExport;

/// Export the full database as YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FintrackResult<()> {
    let export = FullExport::collect(storage)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

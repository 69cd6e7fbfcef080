//! Data export
//!
//! CSV is the primary export format (fixed five-column record stream);
//! JSON and YAML export the full database.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use self::json::{export_full_json, FullExport};
pub use self::yaml::export_full_yaml;

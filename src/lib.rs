//! FinTrack - command-line personal finance tracker
//!
//! Users log income and expense entries, view aggregated dashboard totals,
//! inspect a category breakdown chart, and export records to a file. All
//! state lives in local JSON files; there is no server and no sync.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (incomes, expenses, recurring templates)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer, including the recurring expense pass
//! - `reports`: Dashboard and category breakdown aggregation
//! - `export`: CSV/JSON/YAML export
//! - `display`: Terminal formatting helpers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};

//! Export module for mess-ledger
//!
//! Writes monthly settlements out in several formats:
//! - CSV: one row per member (spreadsheet-compatible)
//! - JSON: records plus computed balances, machine-readable
//! - YAML: the JSON structure, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_settlements_csv;
pub use json::{export_full_json, FullExport, MonthExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

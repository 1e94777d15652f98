//! Export module for the expense tracker
//!
//! Provides ledger export in multiple formats:
//! - CSV: same layout as the expense file (spreadsheet-compatible)
//! - JSON: machine-readable export with budget and totals
//! - YAML: human-readable export with budget and totals

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_expenses_csv;
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;

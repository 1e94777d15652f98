//! JSON Export functionality
//!
//! Exports the ledger and budget to JSON format with schema versioning.
//! Amounts are written as exact decimal strings.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Expense, Money};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The monthly budget at export time
    pub budget: Budget,

    /// Sum of every expense amount
    pub total_spent: Money,

    /// All expenses, in ledger order
    pub expenses: Vec<Expense>,
}

impl LedgerExport {
    /// Snapshot the current ledger
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let total_spent = storage.expenses.total()?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget: storage.budget.get()?,
            total_spent,
            expenses,
        })
    }
}

/// Export the ledger to JSON
pub fn export_ledger_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = LedgerExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

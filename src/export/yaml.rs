//! YAML Export functionality
//!
//! Exports the ledger to YAML format for a human-readable backup.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::LedgerExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the ledger to YAML format
pub fn export_ledger_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ExpenseResult<()> {
    let export = LedgerExport::from_storage(storage)?;

    let header = format!(
        "# Expense Tracker Ledger Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         # Amounts are exact decimal strings.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{Expense, Money};
    use tempfile::TempDir;

    #[test]
    fn test_yaml_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage
            .expenses
            .push(Expense::new("2024-03-04", "Books", Money::from_cents(1999), "novel"))
            .unwrap();

        let mut output = Vec::new();
        export_ledger_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Expense Tracker Ledger Export"));
        assert!(yaml.contains("Books"));

        // YAML comments are ignored by the parser
        let parsed: LedgerExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.total_spent, Money::from_cents(1999));
    }
}

//! CSV Export functionality
//!
//! Writes the ledger in the same layout as the expense file, so an export can
//! be dropped in as a data file elsewhere.

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::expenses::write_expenses;
use crate::storage::Storage;
use std::io::Write;

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> ExpenseResult<()> {
    let expenses = storage.expenses.get_all()?;
    write_expenses(writer, &expenses).map_err(|e| ExpenseError::Export(e.to_string()))
}

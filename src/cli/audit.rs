//! CLI command for viewing the audit log

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries
pub fn handle_log_command(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled in settings.");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod expense;
pub mod export;
pub mod menu;

pub use audit::handle_log_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add_command, handle_list_command, AddArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use menu::{run_menu, MenuChoice};

use crate::storage::StorageLoad;

/// Print load diagnostics for rows that were dropped from the expense file
pub fn report_load(load: &StorageLoad) {
    for row in &load.expenses.skipped {
        eprintln!("Warning: skipping invalid expense entry at {}", row);
    }
}

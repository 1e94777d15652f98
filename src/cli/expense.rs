//! Expense CLI commands
//!
//! One-shot `add` and `list` commands.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_add_outcome, format_budget, format_expense_list};
use crate::error::ExpenseResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Arguments for adding an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense date (YYYY-MM-DD)
    pub date: String,
    /// Category (e.g., "Food", "Travel")
    pub category: String,
    /// Amount (e.g., "300" or "12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Description
    #[arg(short, long, default_value = "")]
    pub description: String,
}

/// Add an expense and save the ledger
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let service = LedgerService::new(storage);

    let outcome =
        service.add_expense(&args.date, &args.category, &args.amount, &args.description)?;
    service.save()?;

    let budget = format_budget(&service.budget()?, settings);
    print!("{}", format_add_outcome(&outcome, Some(budget), settings));
    Ok(())
}

/// Print every expense
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let service = LedgerService::new(storage);
    let listing = service.view_expenses()?;
    print!("{}", format_expense_list(&listing, settings));
    Ok(())
}

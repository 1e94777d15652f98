//! Budget CLI commands
//!
//! Implements CLI commands for setting the monthly budget and tracking
//! spending against it.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget, format_budget_status};
use crate::error::ExpenseResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget (0 clears it)
    Set {
        /// Amount (e.g., "1000" or "1000.00")
        amount: String,
    },

    /// Compare total spending against the budget
    Track,

    /// Show the current budget
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> ExpenseResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        BudgetCommands::Set { amount } => {
            let budget = service.set_budget(&amount)?;
            if budget.is_set() {
                println!("Budget set to {}", format_budget(&budget, settings));
            } else {
                println!("Budget cleared.");
            }
        }
        BudgetCommands::Track => {
            let status = service.track_budget()?;
            print!("{}", format_budget_status(&status, settings));
        }
        BudgetCommands::Show => {
            println!("Monthly budget: {}", format_budget(&service.budget()?, settings));
        }
    }

    Ok(())
}

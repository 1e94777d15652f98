//! Display formatting for terminal output

pub mod budget;
pub mod expense;

pub use budget::{format_budget, format_budget_status};
pub use expense::{format_add_outcome, format_expense_list, format_expense_row};

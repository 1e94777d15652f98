//! Core data models for the expense tracker
//!
//! This module contains the data structures of the ledger: money amounts,
//! expense records and the monthly budget.

pub mod budget;
pub mod expense;
pub mod money;

pub use budget::{Budget, BudgetValidationError};
pub use expense::{Expense, ExpenseValidationError, DATE_FORMAT};
pub use money::{Money, MoneyParseError};

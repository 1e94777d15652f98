//! Expense Tracker - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for a single-user expense
//! tracker: dated expense records kept in a CSV file, a single monthly budget
//! kept in a plain-text file, and reports of spending against that budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, budget)
//! - `storage`: CSV and plain-text storage with atomic writes
//! - `services`: Ledger operations (add, view, set budget, track budget)
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::{ExpensePaths, LoadMode};
//! use expense_tracker::services::LedgerService;
//! use expense_tracker::storage::Storage;
//!
//! # fn main() -> Result<(), expense_tracker::ExpenseError> {
//! let storage = Storage::new(ExpensePaths::new()?)?;
//! storage.load_all(LoadMode::Lenient)?;
//!
//! let ledger = LedgerService::new(&storage);
//! ledger.set_budget("1000")?;
//! ledger.add_expense("2024-01-01", "Food", "300", "lunch")?;
//! println!("{:?}", ledger.track_budget()?);
//! ledger.save()?;
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

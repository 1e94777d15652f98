//! Budget repository for plain-text storage
//!
//! The budget file holds a single decimal value. A missing file, or one whose
//! contents don't parse, leaves the budget unset.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Budget;

use super::file_io::{read_text, write_text_atomic};

/// Outcome of loading the budget file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetLoad {
    /// Whether the file existed
    pub file_found: bool,
    /// The file existed but its contents were not a usable budget
    pub recovered: bool,
}

/// Repository for the current monthly budget
pub struct BudgetRepository {
    path: PathBuf,
    budget: RwLock<Budget>,
}

impl BudgetRepository {
    /// Create a new budget repository with the budget unset
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budget: RwLock::new(Budget::Unset),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the budget from disk
    ///
    /// Malformed contents reset the budget to unset instead of failing.
    pub fn load(&self) -> ExpenseResult<BudgetLoad> {
        let (budget, status) = match read_text(&self.path)? {
            None => (
                Budget::Unset,
                BudgetLoad {
                    file_found: false,
                    recovered: false,
                },
            ),
            Some(text) => match Budget::parse(&text) {
                Ok(budget) => (
                    budget,
                    BudgetLoad {
                        file_found: true,
                        recovered: false,
                    },
                ),
                Err(_) => (
                    Budget::Unset,
                    BudgetLoad {
                        file_found: true,
                        recovered: true,
                    },
                ),
            },
        };

        *self.write_budget()? = budget;
        Ok(status)
    }

    /// Save the budget to disk, overwriting the file
    pub fn save(&self) -> ExpenseResult<()> {
        let text = self.get()?.to_file_text();
        write_text_atomic(&self.path, &format!("{}\n", text))
    }

    /// Get the current budget
    pub fn get(&self) -> ExpenseResult<Budget> {
        Ok(*self.read_budget()?)
    }

    /// Replace the current budget, returning the previous one
    pub fn set(&self, budget: Budget) -> ExpenseResult<Budget> {
        let mut current = self.write_budget()?;
        Ok(std::mem::replace(&mut *current, budget))
    }

    fn read_budget(&self) -> ExpenseResult<std::sync::RwLockReadGuard<'_, Budget>> {
        self.budget
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_budget(&self) -> ExpenseResult<std::sync::RwLockWriteGuard<'_, Budget>> {
        self.budget
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Directory holding the data files
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the data directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                ExpenseError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Resolve paths, preferring an explicit directory when one is given
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ExpenseError> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir.to_path_buf())),
            None => Self::new(),
        }
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Get the path to budget.txt
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.txt")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}

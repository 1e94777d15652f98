//! Storage layer for the expense tracker
//!
//! Provides CSV storage for expenses, plain-text storage for the budget,
//! atomic writes, and the audit hooks every mutation goes through.

pub mod budget;
pub mod expenses;
pub mod file_io;

pub use budget::{BudgetLoad, BudgetRepository};
pub use expenses::{ExpenseRepository, LoadReport, SkippedRow};
pub use file_io::{read_text, write_atomic, write_text_atomic};

use crate::audit::{AuditEntry, AuditEvent, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::config::settings::{LoadMode, Settings};
use crate::error::ExpenseResult;

/// Result of loading both data files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageLoad {
    pub expenses: LoadReport,
    pub budget: BudgetLoad,
}

/// Main storage coordinator owning the expense list and the budget
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    pub budget: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Create a Storage instance honouring the user's settings
    pub fn with_settings(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        let mut storage = Self::new(paths)?;
        if !settings.audit_enabled {
            storage.audit = None;
        }
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// The audit logger, if auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&self, mode: LoadMode) -> ExpenseResult<StorageLoad> {
        let expenses = self.expenses.load(mode)?;
        let budget = self.budget.load()?;
        Ok(StorageLoad { expenses, budget })
    }

    /// Save all data to disk
    pub fn save_all(&self) -> ExpenseResult<()> {
        self.save_expenses()?;
        self.save_budget()
    }

    /// Save the expense list to disk
    pub fn save_expenses(&self) -> ExpenseResult<()> {
        self.expenses.save()?;
        let count = self.expenses.count()?;
        self.record(AuditEvent::ExpensesSaved { count });
        Ok(())
    }

    /// Save the budget to disk
    pub fn save_budget(&self) -> ExpenseResult<()> {
        self.budget.save()?;
        let budget = self.budget.get()?;
        self.record(AuditEvent::BudgetSaved { budget });
        Ok(())
    }

    /// Append an event to the audit log, if enabled
    ///
    /// The change being recorded has already happened, so a failed write is
    /// reported on stderr and otherwise ignored.
    pub fn record(&self, event: AuditEvent) {
        let Some(logger) = &self.audit else {
            return;
        };

        if let Err(e) = logger.append(&AuditEntry::new(event)) {
            eprintln!(
                "Warning: could not write audit log {}: {}",
                logger.path().display(),
                e
            );
        }
    }
}

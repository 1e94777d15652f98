//! Audit log records
//!
//! Expenses have no identity beyond their contents and position, and
//! positions shift meaning across sessions. An added expense is therefore
//! recorded in full, together with the total spent once it was added.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Budget, Expense, Money};

/// A change to the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// An expense was appended
    ExpenseAdded { expense: Expense, total_spent: Money },

    /// The monthly budget was replaced
    BudgetChanged { previous: Budget, current: Budget },

    /// The expense file was rewritten
    ExpensesSaved { count: usize },

    /// The budget file was rewritten
    BudgetSaved { budget: Budget },
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpenseAdded {
                expense,
                total_spent,
            } => write!(f, "expense added: {} (total spent {})", expense, total_spent),
            Self::BudgetChanged { previous, current } => {
                write!(f, "budget changed: {} -> {}", previous, current)
            }
            Self::ExpensesSaved { count } => write!(f, "expenses saved: {} rows", count),
            Self::BudgetSaved { budget } => write!(f, "budget saved: {}", budget),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    #[serde(flatten)]
    pub event: AuditEvent,
}

impl AuditEntry {
    /// Stamp an event with the current time
    pub fn new(event: AuditEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event
        )
    }
}

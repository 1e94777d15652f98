//! Ledger service
//!
//! Provides the expense and budget operations: adding expenses, listing
//! them, setting the monthly budget and comparing spending against it.

use serde::Serialize;

use crate::audit::AuditEvent;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Budget, Expense, Money};
use crate::storage::Storage;

/// Result of a successful add
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The expense that was appended
    pub expense: Expense,
    /// 1-based position of the expense in the ledger
    pub position: usize,
    /// Budget minus total spent, when a budget is set; negative means overspent
    pub remaining: Option<Money>,
}

/// The ledger contents for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseListing {
    /// No expenses recorded yet
    Empty,
    /// Every expense, in insertion order
    Expenses(Vec<Expense>),
}

/// Spending compared against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum BudgetStatus {
    /// No budget has been set
    NotConfigured { total_spent: Money },
    /// Spending is at or below the budget
    WithinBudget {
        budget: Money,
        total_spent: Money,
        remaining: Money,
    },
    /// Spending is above the budget
    Exceeded {
        budget: Money,
        total_spent: Money,
        over: Money,
    },
}

impl BudgetStatus {
    /// Compare a total against a budget
    ///
    /// Fails only if the difference is too large to represent.
    pub fn evaluate(budget: Budget, total_spent: Money) -> ExpenseResult<Self> {
        let status = match budget {
            Budget::Unset => Self::NotConfigured { total_spent },
            Budget::Set(budget) if total_spent > budget => Self::Exceeded {
                budget,
                total_spent,
                over: total_spent.checked_sub(budget).ok_or_else(too_large)?,
            },
            Budget::Set(budget) => Self::WithinBudget {
                budget,
                total_spent,
                remaining: budget.checked_sub(total_spent).ok_or_else(too_large)?,
            },
        };
        Ok(status)
    }

    pub fn total_spent(&self) -> Money {
        match self {
            Self::NotConfigured { total_spent }
            | Self::WithinBudget { total_spent, .. }
            | Self::Exceeded { total_spent, .. } => *total_spent,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }
}

/// Service for ledger operations
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate raw input and append a new expense
    ///
    /// Invalid dates or amounts leave the ledger untouched. The ledger is not
    /// written to disk; call [`LedgerService::save`] for that.
    pub fn add_expense(
        &self,
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> ExpenseResult<AddOutcome> {
        let expense = Expense::from_input(date, category, amount, description)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.add(expense)
    }

    /// Append an already-built expense
    ///
    /// Totals are checked before the ledger is touched, so a failed add
    /// leaves it unchanged.
    pub fn add(&self, expense: Expense) -> ExpenseResult<AddOutcome> {
        let total_spent = self
            .total_spent()?
            .checked_add(expense.amount)
            .ok_or_else(|| {
                ExpenseError::Validation("Amount would make the total too large".into())
            })?;
        let remaining = self.remaining_after(total_spent)?;

        let position = self.storage.expenses.push(expense.clone())?;
        self.storage.record(AuditEvent::ExpenseAdded {
            expense: expense.clone(),
            total_spent,
        });

        Ok(AddOutcome {
            expense,
            position,
            remaining,
        })
    }

    /// List every expense in insertion order
    pub fn view_expenses(&self) -> ExpenseResult<ExpenseListing> {
        let expenses = self.storage.expenses.get_all()?;
        if expenses.is_empty() {
            Ok(ExpenseListing::Empty)
        } else {
            Ok(ExpenseListing::Expenses(expenses))
        }
    }

    /// Parse and set the monthly budget, persisting it immediately
    ///
    /// On invalid input the current budget is left unchanged.
    pub fn set_budget(&self, amount: &str) -> ExpenseResult<Budget> {
        let budget =
            Budget::parse(amount).map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let previous = self.storage.budget.set(budget)?;
        if let Err(e) = self.storage.save_budget() {
            self.storage.budget.set(previous)?;
            return Err(e);
        }

        self.storage.record(AuditEvent::BudgetChanged {
            previous,
            current: budget,
        });

        Ok(budget)
    }

    /// The current budget
    pub fn budget(&self) -> ExpenseResult<Budget> {
        self.storage.budget.get()
    }

    /// Sum of every expense amount
    pub fn total_spent(&self) -> ExpenseResult<Money> {
        self.storage.expenses.total()
    }

    /// Budget minus total spent, or `None` when no budget is set
    pub fn remaining(&self) -> ExpenseResult<Option<Money>> {
        self.remaining_after(self.total_spent()?)
    }

    fn remaining_after(&self, total_spent: Money) -> ExpenseResult<Option<Money>> {
        self.budget()?
            .amount()
            .map(|budget| budget.checked_sub(total_spent).ok_or_else(too_large))
            .transpose()
    }

    /// Compare total spending against the budget
    pub fn track_budget(&self) -> ExpenseResult<BudgetStatus> {
        BudgetStatus::evaluate(self.budget()?, self.total_spent()?)
    }

    /// Write expenses and budget to disk
    pub fn save(&self) -> ExpenseResult<()> {
        self.storage.save_all()
    }
}

fn too_large() -> ExpenseError {
    ExpenseError::Storage("Budget difference is too large to compute".into())
}

//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, computed totals, and audit logging.

pub mod ledger;

pub use ledger::{AddOutcome, BudgetStatus, ExpenseListing, LedgerService};

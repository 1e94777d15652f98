//! Audit logging for the expense tracker
//!
//! Every ledger change (expense added, budget replaced, file saved) is
//! appended to `audit.log` as one JSON line. Writing the log never decides
//! whether a change happens; see `Storage::record`.

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditEvent};
pub use logger::AuditLogger;

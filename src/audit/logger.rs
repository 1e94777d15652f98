//! Append-only JSONL audit log

use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Writes audit entries, one JSON object per line
pub struct AuditLogger {
    path: PathBuf,
}

impl AuditLogger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry and flush it
    pub fn append(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        // Single write so an entry is never split across lines
        file.write_all(&line)
            .and_then(|_| file.flush())
            .map_err(|e| ExpenseError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ExpenseError::Io(format!("Failed to open audit log: {}", e))),
        };

        let mut entries = serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<AuditEntry>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ExpenseError::Json(format!("Corrupt audit log: {}", e)))?;

        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::AuditEvent;
    use crate::models::Budget;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn saved(count: usize) -> AuditEntry {
        AuditEntry::new(AuditEvent::ExpensesSaved { count })
    }

    #[test]
    fn test_append_one_line_per_entry() {
        let (logger, _temp) = create_test_logger();
        logger.append(&saved(1)).unwrap();
        logger.append(&saved(2)).unwrap();

        let contents = std::fs::read_to_string(logger.path()).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_read_recent_keeps_newest() {
        let (logger, _temp) = create_test_logger();
        for count in 0..10 {
            logger.append(&saved(count)).unwrap();
        }

        let recent: Vec<_> = logger
            .read_recent(3)
            .unwrap()
            .into_iter()
            .map(|e| e.event)
            .collect();

        assert_eq!(
            recent,
            vec![
                AuditEvent::ExpensesSaved { count: 7 },
                AuditEvent::ExpensesSaved { count: 8 },
                AuditEvent::ExpensesSaved { count: 9 },
            ]
        );
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_appends_across_instances() {
        let (logger, temp) = create_test_logger();
        logger.append(&saved(1)).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        reopened
            .append(&AuditEntry::new(AuditEvent::BudgetSaved {
                budget: Budget::Unset,
            }))
            .unwrap();

        let entries = reopened.read_recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[1].event, AuditEvent::BudgetSaved { .. }));
    }

    #[test]
    fn test_corrupt_log_is_reported() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "not json\n").unwrap();

        let err = logger.read_recent(5).unwrap_err();
        assert!(matches!(err, ExpenseError::Json(_)));
    }

    #[test]
    fn test_unwritable_log_is_an_error() {
        let (logger, _temp) = create_test_logger();
        std::fs::create_dir(logger.path()).unwrap();

        assert!(logger.append(&saved(1)).is_err());
    }
}

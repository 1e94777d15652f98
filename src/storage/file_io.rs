//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ExpenseError;

/// Read a whole text file, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, ExpenseError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| ExpenseError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Temp file used while writing `path`, kept in the same directory so the
/// final rename stays on one filesystem
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file atomically (write to temp, then rename)
///
/// `write` receives a buffered writer over the temp file. The target is
/// either completely replaced or left as it was.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), ExpenseError>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), ExpenseError>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|_| {
        writer
            .flush()
            .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))
    });

    if let Err(e) = written {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Write a text file atomically
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), ExpenseError> {
    write_atomic(path, |writer| {
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| ExpenseError::Storage(format!("Failed to write data: {}", e)))
    })
}

//! Expense repository for CSV storage
//!
//! Manages loading and saving the ordered expense list to expenses.csv.
//! The file has a `date,category,amount,description` header and one row per
//! expense in insertion order; it is rewritten in full on every save.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::config::LoadMode;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

use super::file_io::write_atomic;

/// Column names of the expense file, in the order they are written
pub const HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// A row dropped while loading the expense file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file
    pub line: u64,
    /// Why the row was dropped
    pub reason: String,
}

impl std::fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Outcome of loading the expense file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Whether the file existed
    pub file_found: bool,
    /// Number of expenses loaded
    pub loaded: usize,
    /// Rows that were dropped, in file order
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Positions of the known columns within the file's header
struct ColumnIndex {
    date: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
    description: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            date: find("date"),
            category: find("category"),
            amount: find("amount"),
            description: find("description"),
        }
    }

    fn parse(&self, record: &StringRecord) -> Result<Expense, String> {
        let field = |column: Option<usize>, name: &str| {
            column
                .and_then(|i| record.get(i))
                .ok_or_else(|| format!("missing '{}' field", name))
        };

        let date = field(self.date, "date")?;
        let category = field(self.category, "category")?;
        let amount = field(self.amount, "amount")?;
        let description = field(self.description, "description")?;

        let amount = Money::parse(amount).map_err(|e| e.to_string())?;

        Ok(Expense::new(date, category, amount, description))
    }
}

/// Parse expense rows from CSV text
///
/// In lenient mode malformed rows are collected as [`SkippedRow`]s; in strict
/// mode the first malformed row is returned as an error.
pub fn read_expenses<R: Read>(
    reader: R,
    mode: LoadMode,
) -> ExpenseResult<(Vec<Expense>, Vec<SkippedRow>)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::from_headers(&headers);

    let mut expenses = Vec::new();
    let mut skipped = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // Header occupies line 1
        let fallback_line = idx as u64 + 2;

        let parsed = match result {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);
                columns.parse(&record).map_err(|reason| SkippedRow { line, reason })
            }
            Err(e) => Err(SkippedRow {
                line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                reason: format!("unreadable row: {}", e),
            }),
        };

        match parsed {
            Ok(expense) => expenses.push(expense),
            Err(row) => match mode {
                LoadMode::Lenient => skipped.push(row),
                LoadMode::Strict => {
                    return Err(ExpenseError::Storage(format!("Invalid expense at {}", row)))
                }
            },
        }
    }

    Ok((expenses, skipped))
}

/// Write the header and every expense, in order, as CSV
pub fn write_expenses<W: Write>(writer: W, expenses: &[Expense]) -> ExpenseResult<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);

    writer.write_record(HEADER)?;
    for expense in expenses {
        writer.write_record([
            expense.date.as_str(),
            expense.category.as_str(),
            expense.amount.to_string().as_str(),
            expense.description.as_str(),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to write expenses: {}", e)))
}

/// Repository for the in-memory expense list and its file
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new, empty expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk, replacing the in-memory list
    ///
    /// A missing file yields an empty list. In strict mode a malformed row
    /// fails the load and leaves the in-memory list untouched.
    pub fn load(&self, mode: LoadMode) -> ExpenseResult<LoadReport> {
        if !self.path.exists() {
            self.write_data()?.clear();
            return Ok(LoadReport::default());
        }

        let file = std::fs::File::open(&self.path).map_err(|e| {
            ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let (expenses, skipped) = read_expenses(file, mode).map_err(|e| match e {
            ExpenseError::Storage(msg) => {
                ExpenseError::Storage(format!("{}: {}", self.path.display(), msg))
            }
            other => other,
        })?;

        let report = LoadReport {
            file_found: true,
            loaded: expenses.len(),
            skipped,
        };

        *self.write_data()? = expenses;

        Ok(report)
    }

    /// Save every expense to disk, overwriting the file
    pub fn save(&self) -> ExpenseResult<()> {
        let data = self.read_data()?;
        write_atomic(&self.path, |writer| write_expenses(writer, &data))
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.read_data()?.clone())
    }

    /// Append an expense, returning the new number of expenses
    pub fn push(&self, expense: Expense) -> ExpenseResult<usize> {
        let mut data = self.write_data()?;
        data.push(expense);
        Ok(data.len())
    }

    /// Number of expenses held
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.read_data()?.len())
    }

    /// Sum of every expense amount
    pub fn total(&self) -> ExpenseResult<Money> {
        let data = self.read_data()?;
        Money::checked_sum(data.iter().map(|e| e.amount))
            .ok_or_else(|| ExpenseError::Storage("Total spent is too large to compute".into()))
    }

    fn read_data(&self) -> ExpenseResult<std::sync::RwLockReadGuard<'_, Vec<Expense>>> {
        self.data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_data(&self) -> ExpenseResult<std::sync::RwLockWriteGuard<'_, Vec<Expense>>> {
        self.data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

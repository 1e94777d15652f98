//! Expense model
//!
//! A single dated expense entry. The date is kept as the text that was
//! entered or loaded; it is only checked against `YYYY-MM-DD` when a new
//! expense is created from user input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MoneyParseError};

/// Calendar format every newly entered expense date must match
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense date as stored (`YYYY-MM-DD` for entries created here)
    pub date: String,

    /// Free-form category label (e.g. "Food", "Travel")
    pub category: String,

    /// Amount spent; negative values reduce the total
    pub amount: Money,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create an expense from already-validated parts
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Build an expense from raw user input, validating the date and amount
    pub fn from_input(
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> Result<Self, ExpenseValidationError> {
        let date = date.trim();
        parse_date(date)?;
        let amount = Money::parse(amount).map_err(ExpenseValidationError::InvalidAmount)?;

        Ok(Self::new(date, category, amount, description))
    }

    /// The date as a calendar date, if it is in `YYYY-MM-DD` form
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date).ok()
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, ExpenseValidationError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| ExpenseValidationError::InvalidDate(s.to_string()))
}

/// Validation errors for expense input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    InvalidDate(String),
    InvalidAmount(MoneyParseError),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "Invalid date '{}', expected YYYY-MM-DD", s),
            Self::InvalidAmount(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let expense = Expense::from_input("2024-01-01", "Food", "300", "lunch").unwrap();
        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, Money::from_cents(30000));
        assert_eq!(expense.description, "lunch");
        assert_eq!(
            expense.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn test_from_input_rejects_bad_date() {
        for date in ["2024-13-01", "2024-02-30", "01/02/2024", "", "yesterday"] {
            let err = Expense::from_input(date, "Food", "10", "").unwrap_err();
            assert!(matches!(err, ExpenseValidationError::InvalidDate(_)), "{}", date);
        }
    }

    #[test]
    fn test_from_input_rejects_bad_amount() {
        let err = Expense::from_input("2024-01-01", "Food", "ten", "").unwrap_err();
        assert!(matches!(err, ExpenseValidationError::InvalidAmount(_)));
        assert_eq!(err.to_string(), "Invalid amount: 'ten'");
    }

    #[test]
    fn test_negative_amount_allowed() {
        let expense = Expense::from_input("2024-01-01", "Refund", "-20.5", "").unwrap();
        assert_eq!(expense.amount, Money::from_cents(-2050));
    }

    #[test]
    fn test_from_input_keeps_text_fields_verbatim() {
        let expense =
            Expense::from_input(" 2024-01-01 ", "  Food ", "12", " lunch, with tea ").unwrap();
        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.category, "  Food ");
        assert_eq!(expense.description, " lunch, with tea ");
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("2024-01-01", "Food", Money::from_cents(30000), "lunch");
        assert_eq!(expense.to_string(), "2024-01-01 Food 300.00 (lunch)");

        let bare = Expense::new("2024-01-01", "Food", Money::from_cents(30000), "");
        assert_eq!(bare.to_string(), "2024-01-01 Food 300.00");
    }

    #[test]
    fn test_loaded_date_not_revalidated() {
        let expense = Expense::new("last week", "Misc", Money::from_cents(100), "");
        assert!(expense.parsed_date().is_none());
    }
}

//! Monthly budget model
//!
//! The budget is either unset or a strictly positive amount. A zero value
//! read from disk or entered by the user means "unset", which is how older
//! budget files written with a `0.0` sentinel are interpreted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::{Money, MoneyParseError};

/// The single current monthly budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "amount")]
pub enum Budget {
    /// No budget configured
    #[default]
    Unset,
    /// A configured spending ceiling
    Set(Money),
}

impl Budget {
    /// Build a budget from an amount, normalizing zero to `Unset`
    pub fn from_amount(amount: Money) -> Result<Self, BudgetValidationError> {
        if amount.is_negative() {
            return Err(BudgetValidationError::Negative(amount));
        }
        if amount.is_zero() {
            return Ok(Self::Unset);
        }
        Ok(Self::Set(amount))
    }

    /// Parse a budget from decimal text
    pub fn parse(s: &str) -> Result<Self, BudgetValidationError> {
        let amount = Money::parse(s).map_err(BudgetValidationError::InvalidAmount)?;
        Self::from_amount(amount)
    }

    /// The configured amount, if any
    pub fn amount(&self) -> Option<Money> {
        match self {
            Self::Unset => None,
            Self::Set(amount) => Some(*amount),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Text written to the budget file
    pub fn to_file_text(&self) -> String {
        self.amount().unwrap_or_default().to_string()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "not set"),
            Self::Set(amount) => write!(f, "{}", amount),
        }
    }
}

/// Validation errors for budget input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    InvalidAmount(MoneyParseError),
    Negative(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount(e) => write!(f, "{}", e),
            Self::Negative(amount) => write!(f, "Budget cannot be negative: {}", amount),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            Budget::parse("1000").unwrap(),
            Budget::Set(Money::from_cents(100000))
        );
        assert_eq!(Budget::parse("0").unwrap(), Budget::Unset);
        assert_eq!(Budget::parse("0.0").unwrap(), Budget::Unset);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(matches!(
            Budget::parse("abc"),
            Err(BudgetValidationError::InvalidAmount(_))
        ));
        assert!(matches!(
            Budget::parse("-5"),
            Err(BudgetValidationError::Negative(_))
        ));
    }

    #[test]
    fn test_file_text() {
        assert_eq!(Budget::Unset.to_file_text(), "0.00");
        assert_eq!(Budget::Set(Money::from_cents(50000)).to_file_text(), "500.00");
    }

    #[test]
    fn test_amount() {
        assert_eq!(Budget::Unset.amount(), None);
        assert!(!Budget::Unset.is_set());
        let budget = Budget::Set(Money::from_cents(1));
        assert_eq!(budget.amount(), Some(Money::from_cents(1)));
        assert!(budget.is_set());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Budget::Set(Money::from_cents(1050))).unwrap();
        assert_eq!(json, r#"{"state":"set","amount":"10.50"}"#);
        let unset = serde_json::to_string(&Budget::Unset).unwrap();
        assert_eq!(unset, r#"{"state":"unset"}"#);
    }
}

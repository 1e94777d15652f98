//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts keep the exact digits they were
//! written with: a loaded `1.234` is saved back as `1.234`. Arithmetic is
//! checked and reports overflow instead of panicking. Console output rounds
//! to whole cents.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// Decimal places always shown in files and on the console
const MIN_SCALE: u32 = 2;

/// A monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, MIN_SCALE))
    }

    /// Wrap a decimal, padding it to at least two decimal places
    pub fn from_decimal(value: Decimal) -> Self {
        if value.is_zero() {
            return Self::zero();
        }

        let mut value = value;
        if value.scale() < MIN_SCALE {
            value.rescale(MIN_SCALE);
        }
        Self(value)
    }

    /// Create a zero Money amount
    pub fn zero() -> Self {
        Self(Decimal::new(0, MIN_SCALE))
    }

    /// The exact decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self::from_decimal)
    }

    /// Subtract two amounts, returning `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self::from_decimal)
    }

    /// Sum amounts, returning `None` if the total overflows
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |total, amount| total.checked_add(amount))
    }

    /// Parse a money amount from decimal text
    ///
    /// Accepts an optional sign, whole units, a fraction of any length and an
    /// optional exponent: "300", "-12.5", "+0.05", ".75", "10.", "1e+16".
    /// Every digit is kept.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
            Some(at) => (&trimmed[..at], Some(&trimmed[at + 1..])),
            None => (trimmed, None),
        };

        let (negative, body) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };

        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        // Rebuilt so the decimal parser only ever sees `[-]digits[.digits]`
        let canonical = format!(
            "{}{}{}{}",
            if negative { "-" } else { "" },
            if whole.is_empty() { "0" } else { whole },
            if fraction.is_empty() { "" } else { "." },
            fraction
        );
        let mut value = Decimal::from_str(&canonical).map_err(|_| invalid())?;

        if let Some(exponent) = exponent {
            let exponent: i32 = exponent.parse().map_err(|_| invalid())?;
            value = apply_exponent(value, exponent).ok_or_else(invalid)?;
        }

        Ok(Self::from_decimal(value))
    }

    /// Format with a currency symbol, rounded to whole cents
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let mut rounded = self
            .0
            .abs()
            .round_dp_with_strategy(MIN_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(MIN_SCALE);

        if self.is_negative() && !rounded.is_zero() {
            format!("-{}{}", symbol, rounded)
        } else {
            format!("{}{}", symbol, rounded)
        }
    }
}

/// Scale `value` by `10^exponent` without losing digits
fn apply_exponent(value: Decimal, exponent: i32) -> Option<Decimal> {
    if value.is_zero() {
        return Some(value);
    }

    if exponent >= 0 {
        // Past 2 * MAX_PRECISION every non-zero value overflows
        if exponent > 2 * Decimal::MAX_SCALE as i32 {
            return None;
        }
        (0..exponent).try_fold(value, |acc, _| acc.checked_mul(Decimal::TEN))
    } else {
        let mut scaled = value;
        let scale = value.scale().checked_add(exponent.unsigned_abs())?;
        scaled.set_scale(scale).ok()?;
        Some(scaled)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Exact decimal text, the form written to the data files
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_decimal(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

//! Money type for representing ringgit amounts
//!
//! Internally stores amounts in sen (i64 hundredths of a ringgit) so that sums
//! and movements are exact. Provides arithmetic, parsing of snapshot fields and
//! the thousands-grouped renderings used by the report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as sen (hundredths of a ringgit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from sen
    ///
    /// # Examples
    /// ```
    /// use loan_movement::models::Money;
    /// let amount = Money::from_cents(1050); // RM10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole ringgit and sen
    ///
    /// # Examples
    /// ```
    /// use loan_movement::models::Money;
    /// let amount = Money::from_ringgit_cents(1_000_000, 0); // RM1,000,000.00
    /// assert_eq!(amount.cents(), 100_000_000);
    /// ```
    pub const fn from_ringgit_cents(ringgit: i64, cents: i64) -> Self {
        Self(ringgit * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in sen
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole ringgit portion (truncated toward zero)
    pub const fn ringgit(&self) -> i64 {
        self.0 / 100
    }

    /// Get the sen portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a snapshot field
    ///
    /// Accepts formats: "10.50", "-10.50", "RM10.50", "1,234,567.5", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol and thousands separators
        let s = s.strip_prefix("RM").unwrap_or(s).trim();
        let digits = s.replace(',', "");

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        if fraction.contains('.') {
            return Err(invalid());
        }

        let ringgit: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Pad or truncate sen to 2 digits
        let sen: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let cents = ringgit
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(sen))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Add, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Thousands-grouped with two decimals, e.g. `-1,234,567.50`
    pub fn format_grouped(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}.{:02}",
            sign,
            group_thousands(self.ringgit().unsigned_abs()),
            self.cents_part()
        )
    }

    /// Thousands-grouped whole ringgit, rounded half away from zero, e.g. `1,234,568`
    pub fn format_grouped_whole(&self) -> String {
        let (sign, units) = self.whole_units();
        format!("{}{}", sign, group_thousands(units))
    }

    /// Whole ringgit without grouping, rounded like `format_grouped_whole`
    pub fn format_plain_whole(&self) -> String {
        let (sign, units) = self.whole_units();
        format!("{}{}", sign, units)
    }

    /// Sign and whole ringgit rounded half away from zero; no sign for zero
    fn whole_units(&self) -> (&'static str, u64) {
        let units = (self.0.unsigned_abs() + 50) / 100;
        let sign = if self.is_negative() && units > 0 {
            "-"
        } else {
            ""
        };
        (sign, units)
    }

    /// Plain decimal without grouping, e.g. `-1234567.50`
    pub fn format_plain(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}.{:02}",
            sign,
            self.ringgit().unsigned_abs(),
            self.cents_part()
        )
    }
}

/// Insert a ',' between every group of three digits
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-RM{}", self.abs().format_grouped())
        } else {
            write!(f, "RM{}", self.format_grouped())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

//! Monetary amount with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so balances never
//! pick up floating-point noise from the JSON store.

use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A balance or transfer amount held at exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_records::Amount;
///
/// let amount = Amount::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount`, rounding to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value.round_dp(Self::SCALE);
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Returns `true` if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// The underlying decimal value.
    pub fn to_decimal(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount::new(self.0 - rhs.0)
    }
}

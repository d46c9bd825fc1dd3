//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! deals in a single currency, rendered with a `$` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::error::CommerceError;

/// Number of minor units in one major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A monetary value.
///
/// Amounts are stored in cents. Arithmetic saturates instead of
/// overflowing so totals stay infallible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// Fails for non-finite amounts and for amounts whose cent value does
    /// not fit in an `i64`.
    ///
    /// ```
    /// use storefront_commerce::money::Money;
    /// let price = Money::from_decimal(109.95).unwrap();
    /// assert_eq!(price.cents, 10995);
    /// ```
    pub fn from_decimal(amount: f64) -> Result<Self, CommerceError> {
        if !amount.is_finite() {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        let scaled = (amount * CENTS_PER_UNIT as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        Ok(Self::new(scaled as i64))
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Multiply by a quantity.
    pub fn times(&self, quantity: u32) -> Money {
        Money::new(self.cents.saturating_mul(i64::from(quantity)))
    }

    /// Add another amount.
    pub fn plus(&self, other: Money) -> Money {
        Money::new(self.cents.saturating_add(other.cents))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let unit = CENTS_PER_UNIT.unsigned_abs();
        format!("{}${}.{:02}", sign, abs / unit, abs % unit)
    }

    /// Sum an iterator of Money values.
    pub fn sum(iter: impl Iterator<Item = Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.plus(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.plus(other)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).unwrap().cents, 4999);
        assert_eq!(Money::from_decimal(109.95).unwrap().cents, 10995);
        assert_eq!(Money::from_decimal(10.0).unwrap().cents, 1000);
    }

    #[test]
    fn test_money_rejects_non_finite() {
        assert!(Money::from_decimal(f64::NAN).is_err());
        assert!(Money::from_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_money_rejects_out_of_range() {
        assert!(Money::from_decimal(1e30).is_err());
        assert!(Money::from_decimal(-1e30).is_err());
        assert!(Money::from_decimal(9.3e16).is_err());
        assert_eq!(Money::from_decimal(9.0e15).unwrap().cents, 900_000_000_000_000_000);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(4000).display(), "$40.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::new(-250).display(), "-$2.50");
    }

    #[test]
    fn test_money_times_and_sum() {
        let total = Money::sum([Money::new(1000).times(2), Money::new(2000)].into_iter());
        assert_eq!(total, Money::new(4000));
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(i64::MAX);
        assert_eq!(big.times(2).cents, i64::MAX);
        assert_eq!((big + Money::new(1)).cents, i64::MAX);
    }
}

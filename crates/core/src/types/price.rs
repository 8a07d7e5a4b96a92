//! Type-safe price representation using decimal arithmetic.
//!
//! All money on the storefront is USD and flows through [`Price`], which
//! wraps a `rust_decimal::Decimal`. No floating point anywhere in money
//! paths.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An exact, non-negative USD amount.
///
/// Construct via [`Price::from_cents`] so amounts always carry two decimal
/// places.
///
/// # Examples
///
/// ```
/// use axis_core::Price;
///
/// let unit = Price::from_cents(1900);
/// assert_eq!(unit.to_string(), "$19.00");
/// assert_eq!(unit.times(3).to_string(), "$57.00");
/// assert!(Price::ZERO.is_free());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The underlying decimal amount in dollars.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this amount is exactly zero (e.g., free shipping).
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by a unit count, e.g., a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_display() {
        assert_eq!(Price::from_cents(1900).to_string(), "$19.00");
        assert_eq!(Price::from_cents(495).to_string(), "$4.95");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_zero_display() {
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_is_free() {
        assert!(Price::ZERO.is_free());
        assert!(Price::from_cents(0).is_free());
        assert!(!Price::from_cents(1).is_free());
    }

    #[test]
    fn test_times() {
        let unit = Price::from_cents(5900);
        assert_eq!(unit.times(2), Price::from_cents(11800));
        assert_eq!(unit.times(0), Price::ZERO);
    }

    #[test]
    fn test_add_and_sum_are_exact() {
        // 19.00 + 59.00 * 2 = 137.00, no float drift
        let total: Price = [Price::from_cents(1900), Price::from_cents(5900).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(13700));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Price = std::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_serde_uses_decimal_string() {
        let price = Price::from_cents(1900);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"19.00\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }
}

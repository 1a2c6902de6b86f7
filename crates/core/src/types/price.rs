//! Money type for rupee amounts.
//!
//! All storefront prices are Indian rupees, so there is no currency axis;
//! the wrapper exists to keep money arithmetic exact and to pin down the
//! rounding used by derived amounts such as tax.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in Indian rupees.
///
/// Backed by a [`Decimal`] rather than a float so that per-line totals and
/// order aggregates never accumulate representation error.
///
/// # Example
///
/// ```
/// use riddhi_core::Price;
///
/// let price = Price::from_rupees(8999);
/// assert_eq!(price.times(2), Price::from_rupees(17998));
/// assert_eq!(price.to_string(), "₹8999");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub fn from_rupees(rupees: u32) -> Self {
        Self(Decimal::from(rupees))
    }

    /// Create a price from a raw decimal amount.
    ///
    /// Callers are expected to have validated sign already; the admin draft
    /// parser rejects negative amounts before they reach the catalog.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Line total: this price times a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Round to whole rupees, half away from zero.
    ///
    /// This is the rounding the storefront advertises on tax lines; for the
    /// non-negative amounts the system produces it agrees with schoolbook
    /// "round half up".
    #[must_use]
    pub fn round_rupees(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Subtraction clamped at zero, for "amount remaining" style values.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
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

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        assert_eq!(Price::from_rupees(1499).amount(), Decimal::from(1499));
        assert!(Price::from_rupees(0).is_zero());
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::from_rupees(1499).times(3), Price::from_rupees(4497));
        assert_eq!(Price::from_rupees(500).times(0), Price::ZERO);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let half = Price::new(Decimal::new(45, 1)); // 4.5
        assert_eq!(half.round_rupees(), Price::from_rupees(5));

        let below = Price::new(Decimal::new(44, 1)); // 4.4
        assert_eq!(below.round_rupees(), Price::from_rupees(4));

        // 18% of 500 is exactly 90 - no rounding needed
        let tax = Price::new(Decimal::from(500) * Decimal::new(18, 2));
        assert_eq!(tax.round_rupees(), Price::from_rupees(90));
    }

    #[test]
    fn test_saturating_sub() {
        let threshold = Price::from_rupees(999);
        assert_eq!(
            threshold.saturating_sub(Price::from_rupees(500)),
            Price::from_rupees(499)
        );
        assert_eq!(
            threshold.saturating_sub(Price::from_rupees(1500)),
            Price::ZERO
        );
    }

    #[test]
    fn test_sum() {
        let total: Price = [8999, 1499, 4999]
            .into_iter()
            .map(Price::from_rupees)
            .sum();
        assert_eq!(total, Price::from_rupees(15497));
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_rupees(15999).to_string(), "₹15999");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Price::from_rupees(8999)).unwrap();
        assert_eq!(json, "\"8999\"");

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::from_rupees(8999));
    }
}

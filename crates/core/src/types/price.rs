//! Type-safe price representation using decimal arithmetic.
//!
//! The QKart backend quotes all costs in a single implicit currency and
//! sends them as JSON numbers, so `Price` wraps a bare [`Decimal`] rather
//! than carrying a currency code. Serialization goes through
//! `rust_decimal::serde::float` to keep the wire format numeric.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply this per-unit price by a quantity.
    ///
    /// Used to compute line costs: `line_cost = unit_cost * quantity`.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times() {
        let unit = Price::from_units(10);
        assert_eq!(unit.times(2), Price::from_units(20));
        assert_eq!(unit.times(0), Price::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_units(100).to_string(), "$100.00");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_serde_numeric_wire_format() {
        let price = Price::from_units(100);
        assert_eq!(serde_json::to_string(&price).unwrap(), "100.0");

        let back: Price = serde_json::from_str("100").unwrap();
        assert_eq!(back, price);
    }
}

//! Price type for cart amounts.
//!
//! Amounts are stored in hundredths of the currency unit to avoid
//! floating-point drift across repeated cart arithmetic. The unit itself is
//! unspecified; attaching a symbol is a renderer concern.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-currency-specific monetary amount, stored in hundredths.
///
/// On the wire a `Price` is a bare JSON number of currency units
/// (`10.0`, not `{"cents": 1000}`), matching the persisted cart format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Create a price from hundredths.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a price from a decimal amount.
    ///
    /// ```
    /// use bodega_cart::Price;
    /// assert_eq!(Price::from_decimal(49.99).cents(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(0)
    }

    /// Amount in hundredths.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Amount as a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether this is the zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add, clamping at the representable range.
    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }

    /// Multiply by a quantity, clamping at the representable range.
    pub fn saturating_mul(self, factor: u32) -> Price {
        Price(self.0.saturating_mul(i64::from(factor)))
    }

    /// Format with two decimal places and no symbol (e.g. `"49.99"`).
    pub fn display(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0 + other.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.to_decimal())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Price::from_decimal(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        assert_eq!(Price::from_decimal(10.0).cents(), 1000);
        assert_eq!(Price::from_decimal(49.99).cents(), 4999);
        assert_eq!(Price::from_decimal(0.0).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_decimal(10.0).display(), "10.00");
        assert_eq!(Price::from_cents(5).display(), "0.05");
        assert_eq!(format!("{}", Price::from_cents(123456)), "1234.56");
    }

    #[test]
    fn test_arithmetic() {
        let a = Price::from_cents(1000);
        let b = Price::from_cents(550);
        assert_eq!((a + b).cents(), 1550);
        assert_eq!(a.saturating_mul(3).cents(), 3000);
        assert_eq!(Price::from_cents(i64::MAX).saturating_mul(2).cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::from_decimal(10.0)).unwrap();
        assert_eq!(json, "10.0");
    }

    #[test]
    fn test_deserializes_from_integer_and_decimal() {
        let p: Price = serde_json::from_str("10").unwrap();
        assert_eq!(p.cents(), 1000);
        let p: Price = serde_json::from_str("10.5").unwrap();
        assert_eq!(p.cents(), 1050);
    }
}

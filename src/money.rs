//! Fixed-point monetary amounts with 2 decimal places.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// A monetary amount that always carries exactly 2 decimal places.
///
/// Negative values are accepted; order totals are not validated.
///
/// # Examples
///
/// ```
/// use checkout_demo::Money;
///
/// let price = Money::from_units(500_000);
/// assert_eq!(price.to_string(), "500000.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Creates an amount from a whole number of currency units.
    pub fn from_units(units: u64) -> Self {
        Money::new(Decimal::from(units))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Number of decimal places every monetary value is rounded to.
pub const MONEY_SCALE: u32 = 2;

/// A currency value, always rounded half away from zero to two decimal places.
///
/// Rounding happens on construction, so every fee, amount and budget that flows through
/// the calculators already carries the same precision the inverse resolver compares against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money::from_cents(0);
    /// The smallest representable step between two amounts.
    pub const CENT: Money = Money::from_cents(1);

    /// Creates a new `Money`, rounding `value` to two decimal places.
    pub fn new(value: Decimal) -> Self {
        Money(value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Creates a new `Money` from a whole number of cents.
    pub const fn from_cents(cents: i64) -> Self {
        let magnitude: u64 = cents.unsigned_abs();
        Money(Decimal::from_parts(
            magnitude as u32,
            (magnitude >> 32) as u32,
            0,
            cents < 0,
            MONEY_SCALE,
        ))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Multiplies by `ratio` and rounds the product.
    pub fn mul_ratio(self, ratio: Decimal) -> Self {
        Money::new(self.0 * ratio)
    }

    /// Divides by `ratio` and rounds the quotient.
    ///
    /// # Panics
    ///
    /// Panics if `ratio` is zero. Callers only divide by the schedule's fixed, non-zero ratios.
    pub fn div_ratio(self, ratio: Decimal) -> Self {
        Money::new(self.0 / ratio)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::new(self.0 - rhs.0)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::new(value)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Money::new)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    /// Parses plain (`"110.01"`) or scientific (`"1.5e3"`) decimal notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Money::new)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

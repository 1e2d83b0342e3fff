//! This module contains the fee schedule used throughout the project.

use crate::types::money::Money;
use rust_decimal::Decimal;

/// Basic fee ratio applied to the bid amount
pub const BASIC_FEE_RATIO: Decimal = Decimal::from_parts(10, 0, 0, false, 2); // 10%

/// Minimum basic fee charged for any positive amount
pub const MIN_BASIC_FEE: Money = Money::from_cents(10_00);

/// Maximum basic fee charged for any amount
pub const MAX_BASIC_FEE: Money = Money::from_cents(50_00);

/// Special fee ratio for cars, applied to the bid amount
pub const FIXED_FEE_RATIO: Decimal = Decimal::from_parts(2, 0, 0, false, 2); // 2%

/// Flat storage fee charged for any positive amount
pub const STORAGE_FEE: Money = Money::from_cents(100_00);

/// Largest budget or amount accepted from callers
pub const MAX_BUDGET: Money = Money::from_cents(1_000_000_000_000_00);

/// A step of the association fee schedule. Bounds are inclusive, and since amounts are whole
/// cents the next tier's `lower` is always one cent above `upper`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssociationTier {
    /// Smallest amount charged this tier's fee
    pub lower: Money,
    /// Largest amount charged this tier's fee, `None` for the open-ended top tier
    pub upper: Option<Money>,
    /// Flat fee added to every amount within the tier
    pub fee: Money,
}

impl AssociationTier {
    /// Whether `amount` falls within this tier.
    pub fn contains(&self, amount: Money) -> bool {
        amount >= self.lower && self.upper.map_or(true, |upper| amount <= upper)
    }
}

/// Association fee tiers, lowest first.
pub static ASSOCIATION_TIERS: [AssociationTier; 5] = [
    AssociationTier {
        lower: Money::ZERO,
        upper: Some(Money::from_cents(99)),
        fee: Money::ZERO,
    },
    AssociationTier {
        lower: Money::from_cents(1_00),
        upper: Some(Money::from_cents(500_00)),
        fee: Money::from_cents(5_00),
    },
    AssociationTier {
        lower: Money::from_cents(500_01),
        upper: Some(Money::from_cents(1_000_00)),
        fee: Money::from_cents(10_00),
    },
    AssociationTier {
        lower: Money::from_cents(1_000_01),
        upper: Some(Money::from_cents(3_000_00)),
        fee: Money::from_cents(15_00),
    },
    AssociationTier {
        lower: Money::from_cents(3_000_01),
        upper: None,
        fee: Money::from_cents(20_00),
    },
];

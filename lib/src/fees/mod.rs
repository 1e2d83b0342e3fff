//! Forward fee calculator: prices a bid amount.
//!
//! Every fee is rounded to two decimals on its own, and the total is the sum of the rounded
//! components. Negative amounts are treated as zero.

use crate::constants::{
    AssociationTier, ASSOCIATION_TIERS, BASIC_FEE_RATIO, FIXED_FEE_RATIO, MAX_BASIC_FEE,
    MIN_BASIC_FEE, STORAGE_FEE,
};
use crate::types::{FeeBreakdown, Money};

/// Calculates the basic fee: 10% of the amount, but not less than $10 and no more than $50.
/// Zero when there is no amount.
pub fn basic_fee(amount: Money) -> Money {
    if !amount.is_positive() {
        return Money::ZERO;
    }
    amount
        .mul_ratio(BASIC_FEE_RATIO)
        .clamp(MIN_BASIC_FEE, MAX_BASIC_FEE)
}

/// Calculates the special fee for cars, 2% of the amount with no floor.
pub fn fixed_fee(amount: Money) -> Money {
    if !amount.is_positive() {
        return Money::ZERO;
    }
    amount.mul_ratio(FIXED_FEE_RATIO)
}

/// Finds the association tier `amount` belongs to.
pub fn association_tier(amount: Money) -> &'static AssociationTier {
    let amount: Money = amount.max(Money::ZERO);
    ASSOCIATION_TIERS
        .iter()
        .find(|tier: &&AssociationTier| tier.contains(amount))
        .unwrap_or(&ASSOCIATION_TIERS[0])
}

/// Association fee depends on the amount:
/// - $5 if the amount is between 1 and 500
/// - $10 if the amount is greater than 500 up to 1000
/// - $15 if the amount is greater than 1000 up to 3000
/// - $20 if the amount is greater than 3000
pub fn association_fee(amount: Money) -> Money {
    association_tier(amount).fee
}

/// Flat storage fee, zero when there is no amount.
pub fn storage_fee(amount: Money) -> Money {
    if amount.is_positive() {
        STORAGE_FEE
    } else {
        Money::ZERO
    }
}

/// Adds the ratio-based fees (basic and fixed) to `amount`.
///
/// The budget resolver derives all of its comparison boundaries from this value, so it must stay
/// the exact prefix of the total computed by [`compute_fees`].
pub fn add_basic_and_fixed_fee(amount: Money) -> Money {
    let amount: Money = amount.max(Money::ZERO);
    amount + basic_fee(amount) + fixed_fee(amount)
}

/// Computes every fee for a bid of `amount`.
pub fn compute_fees(amount: Money) -> FeeBreakdown {
    let amount: Money = amount.max(Money::ZERO);
    let basic_fee: Money = basic_fee(amount);
    let fixed_fee: Money = fixed_fee(amount);
    let association_fee: Money = association_fee(amount);
    let storage_fee: Money = storage_fee(amount);

    FeeBreakdown {
        amount,
        basic_fee,
        fixed_fee,
        association_fee,
        storage_fee,
        total: amount + basic_fee + fixed_fee + association_fee + storage_fee,
    }
}

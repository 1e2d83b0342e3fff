//! Inverse resolver: finds the largest bid amount a total budget can pay for.
//!
//! The forward calculator applies the fees in layers (basic and fixed, then association, then
//! storage). The resolver peels them off in the opposite order. Every boundary it compares against
//! is produced by running the forward calculator on the boundary amount, so rounding in one
//! direction is mirrored exactly in the other.

use crate::constants::{
    AssociationTier, ASSOCIATION_TIERS, BASIC_FEE_RATIO, FIXED_FEE_RATIO, MAX_BASIC_FEE,
    MIN_BASIC_FEE, STORAGE_FEE,
};
use crate::fees::{add_basic_and_fixed_fee, compute_fees};
use crate::types::Money;
use rust_decimal::Decimal;
use tracing::trace;

/// Smallest budget that can pay for a positive amount: one cent plus its mandatory fees.
pub fn minimum_budget() -> Money {
    add_basic_and_fixed_fee(Money::CENT) + STORAGE_FEE
}

/// Computes the maximum amount to bid so that the amount plus all of its fees fits in `budget`.
///
/// Returns zero when the budget cannot cover even the smallest positive bid.
pub fn compute_amount_from_budget(budget: Money) -> Money {
    let budget: Money = budget.max(Money::ZERO);
    if budget < minimum_budget() {
        return Money::ZERO;
    }

    let value: Money = reverse_storage_fee(budget);
    let value: Money = reverse_association_fee(value);
    let estimate: Money = reverse_basic_and_fixed_fees(value);

    settle(estimate, budget)
}

/// Removes the storage fee from `value`, assuming it contains all fees.
pub fn reverse_storage_fee(value: Money) -> Money {
    if value < minimum_budget() {
        return value;
    }
    value - STORAGE_FEE
}

/// Removes the association fee from `value`, assuming it contains the basic and fixed fees too.
///
/// Tiers are checked from the highest down. A tier applies once `value` reaches the cheapest
/// subtotal of that tier plus its fee. The result is capped at the subtotal of the tier's upper
/// bound, since values between two tiers can only afford the top of the lower one.
pub fn reverse_association_fee(value: Money) -> Money {
    let tier: &AssociationTier = ASSOCIATION_TIERS
        .iter()
        .rev()
        .find(|tier: &&AssociationTier| value >= add_basic_and_fixed_fee(tier.lower) + tier.fee)
        .unwrap_or(&ASSOCIATION_TIERS[0]);

    let stripped: Money = value - tier.fee;
    match tier.upper {
        Some(upper) => stripped.min(add_basic_and_fixed_fee(upper)),
        None => stripped,
    }
}

/// Removes the basic and fixed fees from `value`.
///
/// The basic fee is flat at its minimum below the first boundary and flat at its maximum above
/// the second one, and a plain ratio in between.
pub fn reverse_basic_and_fixed_fees(value: Money) -> Money {
    let (min_region_end, max_region_start) = basic_fee_boundaries();

    let amount: Money = if value <= min_region_end {
        (value - MIN_BASIC_FEE).div_ratio(Decimal::ONE + FIXED_FEE_RATIO)
    } else if value >= max_region_start {
        (value - MAX_BASIC_FEE).div_ratio(Decimal::ONE + FIXED_FEE_RATIO)
    } else {
        value.div_ratio(Decimal::ONE + FIXED_FEE_RATIO + BASIC_FEE_RATIO)
    };
    amount.max(Money::ZERO)
}

/// Subtotals at the amounts where the basic fee stops being clamped to its minimum, and where it
/// starts being clamped to its maximum.
fn basic_fee_boundaries() -> (Money, Money) {
    let min_amount: Money = Money::new(MIN_BASIC_FEE.as_decimal() / BASIC_FEE_RATIO);
    let max_amount: Money = Money::new(MAX_BASIC_FEE.as_decimal() / BASIC_FEE_RATIO);
    (
        add_basic_and_fixed_fee(min_amount),
        add_basic_and_fixed_fee(max_amount),
    )
}

/// Moves `estimate` cent by cent until it is the largest amount whose total fits in `budget`.
///
/// The forward total strictly increases with the amount, so the result satisfies
/// `total(amount) <= budget < total(amount + 0.01)`.
fn settle(estimate: Money, budget: Money) -> Money {
    let mut amount: Money = estimate;
    while amount.is_positive() && compute_fees(amount).total > budget {
        amount = amount - Money::CENT;
    }
    while compute_fees(amount + Money::CENT).total <= budget {
        amount = amount + Money::CENT;
    }
    if amount != estimate {
        trace!(%budget, %estimate, %amount, "settled budget estimate");
    }
    amount
}

#[cfg(test)]
mod tests;

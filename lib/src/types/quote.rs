use super::money::Money;
use crate::budget::compute_amount_from_budget;
use crate::fees::compute_fees;
use serde::{Deserialize, Serialize};

/// Represents a bid amount together with every fee it incurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Amount to bid, before fees.
    pub amount: Money,
    /// 10% of the amount, never less than $10 nor more than $50.
    pub basic_fee: Money,
    /// Special fee for cars, 2% of the amount.
    pub fixed_fee: Money,
    /// Flat fee selected by the amount's association tier.
    pub association_fee: Money,
    /// Flat storage fee, charged whenever the amount is positive.
    pub storage_fee: Money,
    /// Amount plus all fees.
    pub total: Money,
}

impl FeeBreakdown {
    /// Sum of all fees, excluding the amount itself.
    pub fn fees(&self) -> Money {
        self.basic_fee + self.fixed_fee + self.association_fee + self.storage_fee
    }
}

/// A `BudgetQuote` answers "how much can I bid with this budget", alongside the fees of that bid.
///
/// Serializes to a flat object with the keys
/// `budget, amount, basic_fee, fixed_fee, association_fee, storage_fee, total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetQuote {
    /// Maximum amount to spend in total.
    pub budget: Money,
    #[serde(flatten)]
    pub breakdown: FeeBreakdown,
}

impl BudgetQuote {
    /// Resolves the largest affordable amount for `budget` and prices it.
    pub fn from_budget(budget: Money) -> Self {
        let amount: Money = compute_amount_from_budget(budget);
        Self {
            budget,
            breakdown: compute_fees(amount),
        }
    }
}

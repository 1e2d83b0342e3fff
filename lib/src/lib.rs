pub mod budget;
pub mod constants;
pub mod fees;
pub mod types;
pub mod validation;

pub use budget::compute_amount_from_budget;
pub use fees::compute_fees;
pub use types::{BudgetQuote, FeeBreakdown, Money};
pub use validation::{parse_amount, parse_budget, ValidationError};

/// Prices the largest bid that fits in `budget`.
///
/// This is the calculation behind a budget quote: the budget is inverted into an amount, and the
/// amount is run back through the forward calculator so that the reported fees are exactly the
/// ones that bid would incur.
///
/// # Arguments
///
/// * `budget` - Maximum amount to spend in total, fees included.
///
/// # Returns
///
/// Returns a `BudgetQuote` holding the budget and the `FeeBreakdown` of the resolved amount.
pub fn quote_budget(budget: Money) -> BudgetQuote {
    BudgetQuote::from_budget(budget)
}

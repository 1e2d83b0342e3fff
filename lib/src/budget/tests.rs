use super::*;
use crate::types::FeeBreakdown;
use rand::Rng;

#[test]
fn test_budgets_under_1() {
    assert_amount(0, 0);
    assert_amount(110_00, 0);
    assert_amount(110_01, 1);
    assert_amount(111_00, 98);
    assert_amount(111_01, 99);
    assert_amount(116_01, 99);
}

#[test]
fn test_budgets_from_1_to_500() {
    assert_amount(116_02, 1_00);
    assert_amount(217_00, 100_00);
    assert_amount(217_06, 100_05);
    assert_amount(441_00, 300_00);
    assert_amount(664_93, 499_94);
    assert_amount(665_00, 500_00);
    assert_amount(670_00, 500_00);
}

#[test]
fn test_budgets_from_500_to_1000() {
    assert_amount(670_01, 500_01);
    assert_amount(925_00, 750_00);
    assert_amount(1_000_00, 823_53);
    assert_amount(1_180_00, 1_000_00);
    assert_amount(1_185_00, 1_000_00);
}

#[test]
fn test_budgets_from_1000_to_3000() {
    assert_amount(1_185_01, 1_000_01);
    assert_amount(2_205_00, 2_000_00);
    assert_amount(3_225_00, 3_000_00);
    assert_amount(3_230_00, 3_000_00);
}

#[test]
fn test_budgets_over_3000() {
    assert_amount(3_230_01, 3_000_01);
    assert_amount(3_740_00, 3_500_00);
    assert_amount(1_000_000_00, 980_225_49);
}

#[test]
fn test_assessment_case() {
    let amount: Money = compute_amount_from_budget(Money::from_cents(1_000_00));
    let breakdown: FeeBreakdown = compute_fees(amount);
    assert_eq!(breakdown.amount, Money::from_cents(823_53));
    assert_eq!(breakdown.basic_fee, Money::from_cents(50_00));
    assert_eq!(breakdown.fixed_fee, Money::from_cents(16_47));
    assert_eq!(breakdown.association_fee, Money::from_cents(10_00));
    assert_eq!(breakdown.storage_fee, Money::from_cents(100_00));
    assert_eq!(breakdown.total, Money::from_cents(1_000_00));
}

#[test]
fn test_negative_budget_is_treated_as_zero() {
    assert_eq!(compute_amount_from_budget(Money::from_cents(-5_00)), Money::ZERO);
}

#[test]
fn test_minimum_budget() {
    assert_eq!(minimum_budget(), Money::from_cents(110_01));
}

#[test]
fn test_reverse_storage_fee() {
    assert_eq!(reverse_storage_fee(Money::from_cents(110_00)), Money::from_cents(110_00));
    assert_eq!(reverse_storage_fee(Money::from_cents(110_01)), Money::from_cents(10_01));
    assert_eq!(reverse_storage_fee(Money::from_cents(1_185_00)), Money::from_cents(1_085_00));
}

#[test]
fn test_reverse_association_fee() {
    // Below the first tier, capped at the subtotal of 0.99
    assert_eq!(reverse_association_fee(Money::from_cents(16_01)), Money::from_cents(11_01));
    assert_eq!(reverse_association_fee(Money::from_cents(16_02)), Money::from_cents(11_02));
    // Between the $5 and $10 tiers only the top of the $5 tier is affordable
    assert_eq!(reverse_association_fee(Money::from_cents(570_00)), Money::from_cents(560_00));
    assert_eq!(reverse_association_fee(Money::from_cents(570_01)), Money::from_cents(560_01));
    assert_eq!(reverse_association_fee(Money::from_cents(1_085_00)), Money::from_cents(1_070_00));
    assert_eq!(reverse_association_fee(Money::from_cents(1_085_01)), Money::from_cents(1_070_01));
    assert_eq!(reverse_association_fee(Money::from_cents(3_130_00)), Money::from_cents(3_110_00));
    // The top tier is never capped
    assert_eq!(reverse_association_fee(Money::from_cents(3_130_01)), Money::from_cents(3_110_01));
    assert_eq!(reverse_association_fee(Money::from_cents(10_000_00)), Money::from_cents(9_980_00));
}

#[test]
fn test_reverse_basic_and_fixed_fees() {
    // Minimum basic fee region
    assert_eq!(reverse_basic_and_fixed_fees(Money::from_cents(11_02)), Money::from_cents(1_00));
    assert_eq!(reverse_basic_and_fixed_fees(Money::from_cents(112_00)), Money::from_cents(100_00));
    // Ratio region
    assert_eq!(reverse_basic_and_fixed_fees(Money::from_cents(336_00)), Money::from_cents(300_00));
    // Maximum basic fee region
    assert_eq!(reverse_basic_and_fixed_fees(Money::from_cents(560_00)), Money::from_cents(500_00));
    assert_eq!(
        reverse_basic_and_fixed_fees(Money::from_cents(1_070_00)),
        Money::from_cents(1_000_00)
    );
    // Never negative
    assert_eq!(reverse_basic_and_fixed_fees(Money::from_cents(5_00)), Money::ZERO);
}

#[test]
fn test_basic_fee_boundaries() {
    assert_eq!(
        basic_fee_boundaries(),
        (Money::from_cents(112_00), Money::from_cents(560_00))
    );
}

#[test]
fn test_near_inverse_law_dense_sweep() {
    // Every cent up to past the last association tier boundary
    for cents in 0..=3_500_00 {
        assert_tight(Money::from_cents(cents));
    }
}

#[test]
fn test_near_inverse_law_random_budgets() {
    let mut rng = rand::thread_rng();
    for _ in 0..20_000 {
        assert_tight(Money::from_cents(rng.gen_range(0..1_000_000_000_00)));
    }
}

#[test]
fn test_forward_then_inverse_is_stable() {
    let mut rng = rand::thread_rng();
    for _ in 0..20_000 {
        let amount: Money = Money::from_cents(rng.gen_range(1..100_000_000));
        let total: Money = compute_fees(amount).total;
        assert_eq!(compute_amount_from_budget(total), amount, "budget {}", total);
    }
}

// HELPER FUNCTIONS
/// Asserts that `budget` (in cents) resolves to `amount` (in cents).
fn assert_amount(budget: i64, amount: i64) {
    let budget: Money = Money::from_cents(budget);
    assert_eq!(
        compute_amount_from_budget(budget),
        Money::from_cents(amount),
        "amount for budget {}",
        budget
    );
}

/// Asserts that the resolved amount fits in `budget` and one more cent would not.
fn assert_tight(budget: Money) {
    let amount: Money = compute_amount_from_budget(budget);
    assert!(
        compute_fees(amount).total <= budget,
        "amount {} overshoots budget {}",
        amount,
        budget
    );
    assert!(
        compute_fees(amount + Money::CENT).total > budget,
        "amount {} leaves room in budget {}",
        amount,
        budget
    );
}

//! Property-based tests for line amount calculation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tilebook_shared::types::round_money;

use super::line::LineItemCalculator;

fn sft_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..50_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn discount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Net is the rounded unrounded difference, never more than a cent away
    /// from the difference of the rounded parts.
    #[test]
    fn prop_net_is_gross_minus_discount(
        sft in sft_strategy(),
        rate in rate_strategy(),
        discount in discount_strategy(),
    ) {
        let amounts = LineItemCalculator::compute(sft, rate, discount);
        let gross = rate * sft;
        let disc = gross * discount / Decimal::ONE_HUNDRED;

        prop_assert_eq!(amounts.net_amount, round_money(gross - disc));
        let drift = (amounts.net_amount - (amounts.gross_amount - amounts.discount_amount)).abs();
        prop_assert!(drift <= Decimal::new(1, 2), "drift {} too large", drift);
    }

    /// All amounts carry at most two decimal places.
    #[test]
    fn prop_amounts_are_rounded(
        sft in sft_strategy(),
        rate in rate_strategy(),
        discount in discount_strategy(),
    ) {
        let amounts = LineItemCalculator::compute(sft, rate, discount);
        prop_assert!(amounts.gross_amount.scale() <= 2);
        prop_assert!(amounts.discount_amount.scale() <= 2);
        prop_assert!(amounts.net_amount.scale() <= 2);
    }

    /// Discounts within 0..=100 keep net between zero and gross.
    #[test]
    fn prop_net_bounded_by_gross(
        sft in sft_strategy(),
        rate in rate_strategy(),
        discount in discount_strategy(),
    ) {
        let amounts = LineItemCalculator::compute(sft, rate, discount);
        prop_assert!(amounts.net_amount >= Decimal::ZERO);
        prop_assert!(amounts.net_amount <= amounts.gross_amount);
    }
}

//! Line amount calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tilebook_shared::types::round_money;

/// Gross, discount and net amounts for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineAmounts {
    /// `rate * sft`.
    pub gross_amount: Decimal,
    /// `gross * discount% / 100`.
    pub discount_amount: Decimal,
    /// `gross - discount`.
    pub net_amount: Decimal,
}

/// Computes line amounts from quantity, rate and discount.
pub struct LineItemCalculator;

impl LineItemCalculator {
    /// Computes the amounts for one line.
    ///
    /// Each amount is rounded to 2 places from the unrounded intermediate
    /// values, so `net_amount` is not the difference of the rounded gross
    /// and discount (they may differ by one cent). Negative rates or
    /// discounts are not clamped.
    #[must_use]
    pub fn compute(sft: Decimal, rate: Decimal, discount_percent: Decimal) -> LineAmounts {
        let gross = rate * sft;
        let discount = gross * discount_percent / Decimal::ONE_HUNDRED;
        let net = gross - discount;

        LineAmounts {
            gross_amount: round_money(gross),
            discount_amount: round_money(discount),
            net_amount: round_money(net),
        }
    }
}

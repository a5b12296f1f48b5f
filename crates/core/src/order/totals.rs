//! Order totals aggregation.
//!
//! Totals are always recomputed from scratch over every line; there are no
//! incremental updates. Line counts are small (tens, not thousands).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{Adjustments, GroupName, LineFigures};

/// Subtotals for one named group of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotals {
    /// Group name.
    pub name: GroupName,
    /// Number of lines in the group.
    pub line_count: usize,
    /// Σ sft.
    pub sft: Decimal,
    /// Σ gross amount.
    pub gross_amount: Decimal,
    /// Σ discount amount.
    pub discount_amount: Decimal,
    /// Σ net amount.
    pub net_amount: Decimal,
    /// Σ pieces.
    pub pieces: u64,
    /// Σ full boxes.
    pub boxes: u64,
    /// Σ loose pieces.
    pub loose_pieces: u64,
}

impl GroupTotals {
    /// Sums the figures of one group.
    #[must_use]
    pub fn from_figures(name: GroupName, figures: &[LineFigures]) -> Self {
        figures.iter().fold(
            Self {
                name,
                line_count: 0,
                sft: Decimal::ZERO,
                gross_amount: Decimal::ZERO,
                discount_amount: Decimal::ZERO,
                net_amount: Decimal::ZERO,
                pieces: 0,
                boxes: 0,
                loose_pieces: 0,
            },
            |mut acc, line| {
                acc.line_count += 1;
                acc.sft += line.conversion.sft;
                acc.gross_amount += line.amounts.gross_amount;
                acc.discount_amount += line.amounts.discount_amount;
                acc.net_amount += line.amounts.net_amount;
                acc.pieces += u64::from(line.conversion.pieces);
                acc.boxes += u64::from(line.conversion.box_count);
                acc.loose_pieces += u64::from(line.conversion.loose_pieces);
                acc
            },
        )
    }
}

/// Aggregate totals of an order.
///
/// Persisted alongside the lines as a snapshot, but always re-derivable from
/// them: the snapshot is a cache, not a source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderTotals {
    /// Σ sft over all groups.
    pub sft: Decimal,
    /// Σ gross amount.
    pub gross_amount: Decimal,
    /// Σ discount amount.
    pub discount_amount: Decimal,
    /// Σ net amount of the lines.
    pub subtotal: Decimal,
    /// `subtotal * vat% / 100`.
    pub vat_amount: Decimal,
    /// `subtotal - less + carrying + unloading + vat`.
    pub net: Decimal,
    /// `net - advance_paid`.
    pub rest: Decimal,
    /// Σ pieces.
    pub pieces: u64,
    /// Σ full boxes.
    pub boxes: u64,
    /// Σ loose pieces.
    pub loose_pieces: u64,
    /// Per-group subtotals in group order.
    pub groups: Vec<GroupTotals>,
}

impl OrderTotals {
    /// Aggregates a single ungrouped list of lines.
    #[must_use]
    pub fn aggregate(figures: &[LineFigures], adjustments: &Adjustments) -> Self {
        Self::aggregate_groups(&[(GroupName::Main, figures)], adjustments)
    }

    /// Aggregates grouped lines. Grand totals sum every group unconditionally.
    ///
    /// VAT, net and rest are kept exact; only line values are rounded.
    #[must_use]
    pub fn aggregate_groups(
        groups: &[(GroupName, &[LineFigures])],
        adjustments: &Adjustments,
    ) -> Self {
        let groups: Vec<GroupTotals> = groups
            .iter()
            .map(|(name, figures)| GroupTotals::from_figures(*name, figures))
            .collect();

        let sft: Decimal = groups.iter().map(|g| g.sft).sum();
        let gross_amount: Decimal = groups.iter().map(|g| g.gross_amount).sum();
        let discount_amount: Decimal = groups.iter().map(|g| g.discount_amount).sum();
        let subtotal: Decimal = groups.iter().map(|g| g.net_amount).sum();

        let vat_amount = subtotal * adjustments.vat_percent / Decimal::ONE_HUNDRED;
        let net = subtotal - adjustments.less + adjustments.carrying + adjustments.unloading
            + vat_amount;
        let rest = net - adjustments.advance_paid;

        Self {
            sft,
            gross_amount,
            discount_amount,
            subtotal,
            vat_amount,
            net,
            rest,
            pieces: groups.iter().map(|g| g.pieces).sum(),
            boxes: groups.iter().map(|g| g.boxes).sum(),
            loose_pieces: groups.iter().map(|g| g.loose_pieces).sum(),
            groups,
        }
    }

    /// Amount reported for tile orders (the line subtotal).
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.subtotal
    }

    /// Subtotals for one group, if present.
    #[must_use]
    pub fn group(&self, name: GroupName) -> Option<&GroupTotals> {
        self.groups.iter().find(|g| g.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{Conversion, SizeKey};
    use crate::pricing::LineAmounts;
    use rust_decimal_macros::dec;

    fn figures(sft: Decimal, gross: Decimal, discount: Decimal, net: Decimal) -> LineFigures {
        LineFigures {
            conversion: Conversion {
                size_key: SizeKey::parse("24X24"),
                sft,
                raw_sft: sft,
                box_count: 2,
                loose_pieces: 1,
                pieces: 9,
                pieces_per_box: Some(4),
            },
            amounts: LineAmounts {
                gross_amount: gross,
                discount_amount: discount,
                net_amount: net,
            },
        }
    }

    #[test]
    fn test_invoice_totals() {
        let lines = vec![
            figures(dec!(400), dec!(22000), dec!(2200), dec!(19800)),
            figures(dec!(40), dec!(2000), dec!(0), dec!(2000)),
        ];
        let adjustments = Adjustments {
            less: dec!(300),
            carrying: dec!(500),
            unloading: dec!(200),
            vat_percent: dec!(5),
            advance_paid: dec!(10000),
        };

        let totals = OrderTotals::aggregate(&lines, &adjustments);

        assert_eq!(totals.sft, dec!(440));
        assert_eq!(totals.gross_amount, dec!(24000));
        assert_eq!(totals.discount_amount, dec!(2200));
        assert_eq!(totals.subtotal, dec!(21800));
        assert_eq!(totals.vat_amount, dec!(1090));
        // 21800 - 300 + 500 + 200 + 1090
        assert_eq!(totals.net, dec!(23290));
        assert_eq!(totals.rest, dec!(13290));
        assert_eq!((totals.pieces, totals.boxes, totals.loose_pieces), (18, 4, 2));
    }

    #[test]
    fn test_vat_is_not_rounded() {
        let lines = vec![figures(dec!(1), dec!(10.01), dec!(0), dec!(10.01))];
        let adjustments = Adjustments {
            vat_percent: dec!(7.5),
            ..Adjustments::default()
        };
        let totals = OrderTotals::aggregate(&lines, &adjustments);
        assert_eq!(totals.vat_amount, dec!(0.75075));
        assert_eq!(totals.net, dec!(10.76075));
    }

    #[test]
    fn test_groups_sum_unconditionally() {
        let first = vec![figures(dec!(100), dec!(5000), dec!(0), dec!(5000))];
        let second = vec![
            figures(dec!(50), dec!(2500), dec!(0), dec!(2500)),
            figures(dec!(25), dec!(1250), dec!(0), dec!(1250)),
        ];
        let totals = OrderTotals::aggregate_groups(
            &[
                (GroupName::FirstLoad, first.as_slice()),
                (GroupName::SecondLoad, second.as_slice()),
            ],
            &Adjustments::default(),
        );

        assert_eq!(totals.sft, dec!(175));
        assert_eq!(totals.amount(), dec!(8750));
        assert_eq!(totals.group(GroupName::FirstLoad).unwrap().sft, dec!(100));
        assert_eq!(totals.group(GroupName::SecondLoad).unwrap().line_count, 2);
        assert!(totals.group(GroupName::Main).is_none());
    }

    #[test]
    fn test_empty_order() {
        let totals = OrderTotals::aggregate(
            &[],
            &Adjustments {
                carrying: dec!(150),
                advance_paid: dec!(200),
                ..Adjustments::default()
            },
        );
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.net, dec!(150));
        assert_eq!(totals.rest, dec!(-50));
    }
}

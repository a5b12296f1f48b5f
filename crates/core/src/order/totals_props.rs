//! Property-based tests for order totals.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tilebook_shared::types::RecordId;

use super::calculator::OrderCalculator;
use super::record::{OrderRecord, PartyInfo};
use super::types::{Adjustments, GroupName, LineGroup, OrderKind, OrderLine};
use crate::measure::PackingTable;

/// Strategy for an invoice line drawn from the built-in inch sizes.
fn invoice_line() -> impl Strategy<Value = OrderLine> {
    let sizes = prop_oneof![
        Just((24i64, 24i64)),
        Just((12, 12)),
        Just((8, 12)),
        Just((16, 16)),
        Just((30, 30)),
    ];
    (sizes, 0u32..500, 0i64..20_000, 0i64..=2_000).prop_map(
        |((length, width), pieces, rate_cents, discount_hundredths)| OrderLine {
            model: "GL".into(),
            length: Decimal::from(length),
            width: Decimal::from(width),
            quantity: pieces,
            rate: Decimal::new(rate_cents, 2),
            discount_percent: Decimal::new(discount_hundredths, 2),
            ..OrderLine::default()
        },
    )
}

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn adjustments() -> impl Strategy<Value = Adjustments> {
    (money(), money(), money(), 0i64..=2_000, money()).prop_map(
        |(less, carrying, unloading, vat, advance_paid)| Adjustments {
            less,
            carrying,
            unloading,
            vat_percent: Decimal::new(vat, 2),
            advance_paid,
        },
    )
}

fn main_group(lines: Vec<OrderLine>) -> Vec<LineGroup> {
    vec![LineGroup {
        name: GroupName::Main,
        lines,
    }]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Totals do not depend on line order.
    #[test]
    fn prop_totals_invariant_under_reordering(
        lines in prop::collection::vec(invoice_line(), 0..12),
        adj in adjustments(),
    ) {
        let table = PackingTable::inch_default();
        let calc = OrderCalculator::new(&table);

        let mut reversed = lines.clone();
        reversed.reverse();

        let a = calc.totals(OrderKind::Invoice, &main_group(lines), &adj);
        let b = calc.totals(OrderKind::Invoice, &main_group(reversed), &adj);
        prop_assert_eq!(a, b);
    }

    /// Net follows the adjustment formula exactly.
    #[test]
    fn prop_net_formula(
        lines in prop::collection::vec(invoice_line(), 0..12),
        adj in adjustments(),
    ) {
        let table = PackingTable::inch_default();
        let calc = OrderCalculator::new(&table);
        let totals = calc.totals(OrderKind::Invoice, &main_group(lines), &adj);

        let vat = totals.subtotal * adj.vat_percent / Decimal::ONE_HUNDRED;
        prop_assert_eq!(totals.vat_amount, vat);
        prop_assert_eq!(
            totals.net,
            totals.subtotal - adj.less + adj.carrying + adj.unloading + vat
        );
        prop_assert_eq!(totals.rest, totals.net - adj.advance_paid);
    }

    /// Changing the carrying cost moves net by exactly that amount.
    #[test]
    fn prop_sensitive_to_adjustments(
        lines in prop::collection::vec(invoice_line(), 1..6),
        adj in adjustments(),
        bump in 1i64..100_000,
    ) {
        let table = PackingTable::inch_default();
        let calc = OrderCalculator::new(&table);
        let groups = main_group(lines);

        let base = calc.totals(OrderKind::Invoice, &groups, &adj);
        let bumped_adj = Adjustments {
            carrying: adj.carrying + Decimal::new(bump, 2),
            ..adj
        };
        let bumped = calc.totals(OrderKind::Invoice, &groups, &bumped_adj);
        prop_assert_eq!(bumped.net - base.net, Decimal::new(bump, 2));
        prop_assert_eq!(bumped.subtotal, base.subtotal);
    }

    /// A refreshed snapshot stays coherent after a JSON round trip.
    #[test]
    fn prop_snapshot_round_trip_is_coherent(
        lines in prop::collection::vec(invoice_line(), 1..8),
        adj in adjustments(),
    ) {
        let table = PackingTable::inch_default();
        let calc = OrderCalculator::new(&table);
        let mut record = OrderRecord::new(
            RecordId::new("CT00001"),
            OrderKind::Invoice,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            PartyInfo::default(),
        );
        for line in lines {
            record.push_line(GroupName::Main, line).unwrap();
        }
        record.adjustments = adj;
        record.refresh_totals(&calc);

        let stored = serde_json::to_string(&record).unwrap();
        let loaded: OrderRecord = serde_json::from_str(&stored).unwrap();
        prop_assert!(loaded.is_coherent(&calc));
    }
}

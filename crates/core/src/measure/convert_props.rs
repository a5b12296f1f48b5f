//! Property-based tests for unit conversion.

use proptest::prelude::*;
use rust_decimal::Decimal;
use tilebook_shared::types::round_money;

use super::convert::{UnitConverter, split_into_boxes};
use super::packing::PackingTable;

/// Strategy for a tile dimension between 0.5 and 120.0 inches.
fn dimension() -> impl Strategy<Value = Decimal> {
    (5i64..=1_200i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting the same input twice yields identical output.
    #[test]
    fn prop_convert_is_idempotent(
        length in dimension(),
        width in dimension(),
        pieces in 0u32..10_000,
    ) {
        let table = PackingTable::inch_default();
        let converter = UnitConverter::new(&table);
        let first = converter.convert(length, width, pieces, None);
        let second = converter.convert(length, width, pieces, None);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.raw_sft, second.raw_sft);
    }

    /// Boxes and loose pieces always recompose the requested count.
    #[test]
    fn prop_split_recomposes(pieces in 0u32..100_000, per_box in proptest::option::of(0u32..50)) {
        let (boxes, loose) = split_into_boxes(pieces, per_box);
        match per_box.filter(|p| *p > 0) {
            Some(p) => {
                prop_assert_eq!(boxes * p + loose, pieces);
                prop_assert!(loose < p);
            }
            None => {
                prop_assert_eq!(boxes, 0);
                prop_assert_eq!(loose, pieces);
            }
        }
    }

    /// Inch SFT is the rounded area formula.
    #[test]
    fn prop_inch_sft_formula(
        length in dimension(),
        width in dimension(),
        pieces in 0u32..10_000,
    ) {
        let table = PackingTable::inch_default();
        let result = UnitConverter::new(&table).convert(length, width, pieces, None);
        let expected = length * width / Decimal::from(144) * Decimal::from(pieces);
        prop_assert_eq!(result.sft, round_money(expected));
        prop_assert!(result.sft >= Decimal::ZERO);
    }
}

//! Property-based tests for ledger balances and entry validation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tilebook_shared::types::EntryId;

use super::balance::{Balances, fold_balances};
use super::entry::{EntryKind, FinanceEntry, NewEntry};
use super::error::LedgerError;
use super::validation::validate_entry;

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![
        Just(EntryKind::AdvanceReceipt),
        Just(EntryKind::AdvanceAdjustment),
        Just(EntryKind::DueCreated),
        Just(EntryKind::DuePayment),
    ]
}

fn entry_strategy() -> impl Strategy<Value = FinanceEntry> {
    (
        prop_oneof![Just("A"), Just("B"), Just("C")],
        kind_strategy(),
        positive_amount(),
        1u32..=28,
    )
        .prop_map(|(party, kind, amount, day)| FinanceEntry {
            id: EntryId::new(format!("E-{day}")),
            party_name: party.to_string(),
            phone: String::new(),
            kind,
            amount,
            date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap_or_default(),
            remarks: String::new(),
        })
}

fn proposal(party: &str, kind: EntryKind, amount: Decimal) -> NewEntry {
    NewEntry {
        party_name: party.to_string(),
        phone: String::new(),
        kind,
        amount,
        date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
        remarks: String::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Balance folding is order independent.
    #[test]
    fn prop_fold_is_commutative(entries in prop::collection::vec(entry_strategy(), 0..40)) {
        let mut reversed = entries.clone();
        reversed.reverse();

        let forward = fold_balances(&entries);
        let backward = fold_balances(&reversed);
        prop_assert_eq!(forward.len(), backward.len());
        for (party, balance) in &forward {
            let other = &backward[party];
            prop_assert_eq!(balance.advance_balance(), other.advance_balance());
            prop_assert_eq!(balance.due_balance(), other.due_balance());
            prop_assert_eq!(balance.last_date, other.last_date);
        }
    }

    /// Balances equal the sum of signed amounts per book.
    #[test]
    fn prop_balance_is_signed_sum(entries in prop::collection::vec(entry_strategy(), 0..40)) {
        let balances = fold_balances(&entries);
        for (party, balance) in &balances {
            let signed = |positive: EntryKind, negative: EntryKind| -> Decimal {
                entries
                    .iter()
                    .filter(|e| &e.party_name == party)
                    .map(|e| {
                        if e.kind == positive {
                            e.amount
                        } else if e.kind == negative {
                            -e.amount
                        } else {
                            Decimal::ZERO
                        }
                    })
                    .sum()
            };
            prop_assert_eq!(
                balance.advance_balance(),
                signed(EntryKind::AdvanceReceipt, EntryKind::AdvanceAdjustment)
            );
            prop_assert_eq!(
                balance.due_balance(),
                signed(EntryKind::DueCreated, EntryKind::DuePayment)
            );
        }
    }

    /// A draw-down is accepted exactly when it does not exceed the balance.
    #[test]
    fn prop_draw_down_bounded_by_balance(
        receipt in positive_amount(),
        request in positive_amount(),
    ) {
        let entries = vec![FinanceEntry {
            id: EntryId::new("ADV-0001"),
            party_name: "A".into(),
            phone: String::new(),
            kind: EntryKind::AdvanceReceipt,
            amount: receipt,
            date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap_or_default(),
            remarks: String::new(),
        }];
        let balances = fold_balances(&entries);
        let result = validate_entry(&proposal("A", EntryKind::AdvanceAdjustment, request), &balances);

        if request <= receipt {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result,
                Err(LedgerError::AdjustmentExceedsBalance {
                    party: "A".into(),
                    requested: request,
                    max: receipt,
                })
            );
        }
    }

    /// Zero and negative amounts are rejected for every kind.
    #[test]
    fn prop_non_positive_rejected(kind in kind_strategy(), cents in 0i64..100_000_000i64) {
        let amount = Decimal::new(-cents, 2);
        let result = validate_entry(&proposal("A", kind, amount), &Balances::new());
        prop_assert_eq!(result, Err(LedgerError::NonPositiveAmount(amount)));
    }
}

//! Property-based tests for recording entries.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::{EntryKind, FinanceEntry, NewEntry};
use super::service::LedgerEngine;
use crate::ids::SequenceIdGenerator;

fn request() -> impl Strategy<Value = (EntryKind, Decimal)> {
    (
        prop_oneof![
            Just(EntryKind::AdvanceReceipt),
            Just(EntryKind::AdvanceAdjustment),
            Just(EntryKind::DueCreated),
            Just(EntryKind::DuePayment),
        ],
        (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Recording through the engine can never drive a balance negative.
    #[test]
    fn prop_recorded_ledger_never_negative(requests in prop::collection::vec(request(), 1..60)) {
        let ids = SequenceIdGenerator::new();
        let mut entries: Vec<FinanceEntry> = Vec::new();

        for (kind, amount) in requests {
            let balances = LedgerEngine::balances_as_of(&entries);
            let proposal = NewEntry {
                party_name: "A".into(),
                phone: String::new(),
                kind,
                amount,
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
                remarks: String::new(),
            };
            if let Ok(entry) = LedgerEngine::record(proposal, &balances, &ids) {
                entries.push(entry);
            }

            let balance = LedgerEngine::balance_for(&entries, "A");
            prop_assert!(balance.advance_balance() >= Decimal::ZERO);
            prop_assert!(balance.due_balance() >= Decimal::ZERO);
        }
    }
}

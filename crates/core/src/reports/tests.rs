//! Tests for the reports module.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tilebook_shared::types::{EntryId, RecordId, ShipmentId};

use super::error::ReportError;
use super::service::{ReportService, month_key};
use crate::ledger::{Book, EntryKind, FinanceEntry};
use crate::order::{OrderKind, OrderRecord, PartyInfo};
use crate::shipment::{ShipmentEntry, ShipmentStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(id: &str, kind: OrderKind, on: NaiveDate, sft: Decimal, subtotal: Decimal) -> OrderRecord {
    let mut record = OrderRecord::new(RecordId::new(id), kind, on, PartyInfo::default());
    record.totals.sft = sft;
    record.totals.subtotal = subtotal;
    record.totals.net = subtotal;
    record.totals.rest = subtotal;
    record
}

fn invoice(id: &str, net: Decimal, rest: Decimal) -> OrderRecord {
    let mut record = record(id, OrderKind::Invoice, date(2025, 3, 1), Decimal::ZERO, net);
    record.totals.rest = rest;
    record
}

fn entry(id: &str, party: &str, kind: EntryKind, amount: Decimal, on: NaiveDate) -> FinanceEntry {
    FinanceEntry {
        id: EntryId::new(id),
        party_name: party.to_string(),
        phone: String::new(),
        kind,
        amount,
        date: on,
        remarks: String::new(),
    }
}

fn shipment(id: &str, status: ShipmentStatus) -> ShipmentEntry {
    ShipmentEntry {
        id: ShipmentId::new(id),
        order_ref: RecordId::new("ORD-1"),
        date: date(2025, 3, 1),
        status,
        truck_no: None,
        truck_ref: None,
        so_document: "so.pdf".into(),
        unload_document: None,
        unload_remarks: String::new(),
    }
}

fn ledger() -> Vec<FinanceEntry> {
    vec![
        entry("ADV-1", "Rahim Traders", EntryKind::AdvanceReceipt, dec!(5000), date(2025, 2, 10)),
        entry("ADV-2", "Rahim Traders", EntryKind::AdvanceAdjustment, dec!(2000), date(2025, 3, 2)),
        entry("ADV-3", "Karim & Sons", EntryKind::AdvanceReceipt, dec!(700), date(2025, 3, 4)),
        entry("ADV-4", "Karim & Sons", EntryKind::AdvanceAdjustment, dec!(700), date(2025, 3, 9)),
        entry("DUE-5", "Nila Tiles", EntryKind::DueCreated, dec!(1200), date(2025, 3, 20)),
        entry("DUE-6", "Nila Tiles", EntryKind::DuePayment, dec!(200), date(2025, 3, 3)),
    ]
}

#[test]
fn test_orders_summary_skips_invoices() {
    let records = vec![
        record("ORD-1", OrderKind::Warehouse, date(2025, 3, 1), dec!(96.88), dec!(6200)),
        record("ORD-2", OrderKind::TwoPoint, date(2025, 3, 8), dec!(40), dec!(2500.50)),
        invoice("CT00001", dec!(9000), dec!(0)),
    ];
    let summary = ReportService::orders_summary(&records);
    assert_eq!(summary.sft, dec!(136.88));
    assert_eq!(summary.amount, dec!(8700.50));
    assert_eq!(summary.count, 2);
}

#[test]
fn test_invoice_summary() {
    let records = vec![
        invoice("CT00001", dec!(9000), dec!(1500)),
        invoice("CT00002", dec!(3000), dec!(0)),
        record("ORD-1", OrderKind::Site, date(2025, 3, 1), dec!(10), dec!(800)),
    ];
    let summary = ReportService::invoice_summary(&records);
    assert_eq!(summary.net, dec!(12000));
    assert_eq!(summary.pending, dec!(1500));
    assert_eq!(summary.count, 2);
}

#[test]
fn test_overpaid_invoice_reduces_pending() {
    let records = vec![
        invoice("CT00001", dec!(5000), dec!(1000)),
        invoice("CT00002", dec!(2000), dec!(-300)),
    ];
    let summary = ReportService::invoice_summary(&records);
    assert_eq!(summary.pending, dec!(700));
}

#[test]
fn test_pipeline_summary() {
    let shipments = vec![
        shipment("SO-R-1", ShipmentStatus::SoReady),
        shipment("SO-R-2", ShipmentStatus::Unloaded),
        shipment("SO-R-3", ShipmentStatus::TruckAssigned),
    ];
    let summary = ReportService::pipeline_summary(&shipments);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.unloaded, 1);
}

#[test]
fn test_finance_summary() {
    let summary = ReportService::finance_summary(&ledger());
    assert_eq!(summary.advance_in, dec!(5700));
    assert_eq!(summary.advance_out, dec!(2700));
    assert_eq!(summary.due_in, dec!(1200));
    assert_eq!(summary.due_out, dec!(200));
}

#[test]
fn test_orders_by_month_newest_first() {
    let records = vec![
        record("ORD-1", OrderKind::Warehouse, date(2024, 12, 30), dec!(10), dec!(100)),
        record("ORD-2", OrderKind::Warehouse, date(2025, 3, 1), dec!(20), dec!(200)),
        record("ORD-3", OrderKind::Site, date(2025, 3, 31), dec!(5), dec!(50)),
        invoice("CT00001", dec!(9000), dec!(0)),
    ];
    let months = ReportService::orders_by_month(&records);
    assert_eq!(months.len(), 2);
    assert_eq!(months[0].month, "2025-03");
    assert_eq!(months[0].label, "March 2025");
    assert_eq!(months[0].summary.sft, dec!(25));
    assert_eq!(months[0].summary.count, 2);
    assert_eq!(months[1].month, "2024-12");
    assert_eq!(months[1].summary.amount, dec!(100));
}

#[test]
fn test_finance_by_month() {
    let months = ReportService::finance_by_month(&ledger());
    let keys: Vec<&str> = months.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(keys, vec!["2025-03", "2025-02"]);
    assert_eq!(months[0].summary.advance_out, dec!(2700));
    assert_eq!(months[0].summary.due_in, dec!(1200));
    assert_eq!(months[1].summary.advance_in, dec!(5000));
}

#[test]
fn test_active_balances() {
    let advances = ReportService::active_balances(&ledger(), Book::Advance);
    assert_eq!(advances.parties.len(), 1);
    assert_eq!(advances.parties[0].party, "Rahim Traders");
    assert_eq!(advances.parties[0].balance, dec!(3000));
    assert_eq!(advances.parties[0].last_date, Some(date(2025, 3, 2)));
    assert_eq!(advances.total, dec!(3000));

    let dues = ReportService::active_balances(&ledger(), Book::Due);
    assert_eq!(dues.parties.len(), 1);
    assert_eq!(dues.parties[0].balance, dec!(1000));
    assert_eq!(dues.parties[0].last_date, Some(date(2025, 3, 20)));
}

#[test]
fn test_monthly_transactions() {
    let entries = ledger();
    let advances = ReportService::monthly_transactions(&entries, "2025-03", Book::Advance).unwrap();
    let ids: Vec<&str> = advances.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["ADV-2", "ADV-3", "ADV-4"]);

    let dues = ReportService::monthly_transactions(&entries, "2025-03", Book::Due).unwrap();
    let ids: Vec<&str> = dues.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["DUE-6", "DUE-5"]);

    assert!(
        ReportService::monthly_transactions(&entries, "2025-01", Book::Due)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_monthly_transactions_rejects_bad_month() {
    let entries = ledger();
    for bad in ["2025-13", "March", "2025-3", ""] {
        assert_eq!(
            ReportService::monthly_transactions(&entries, bad, Book::Due),
            Err(ReportError::InvalidMonth(bad.to_string()))
        );
    }
}

#[test]
fn test_dashboard() {
    let records = vec![
        record("ORD-1", OrderKind::Warehouse, date(2025, 3, 1), dec!(10), dec!(100)),
        invoice("CT00001", dec!(9000), dec!(400)),
    ];
    let shipments = vec![shipment("SO-R-1", ShipmentStatus::Unloaded)];
    let dashboard = ReportService::dashboard(&records, &shipments, &ledger());

    assert_eq!(dashboard.orders.count, 1);
    assert_eq!(dashboard.invoices.pending, dec!(400));
    assert_eq!(dashboard.pipeline.unloaded, 1);
    assert_eq!(dashboard.active_advances.book, Book::Advance);
    assert_eq!(dashboard.active_dues.total, dec!(1000));
    assert_eq!(dashboard.order_months.len(), 1);
}

#[test]
fn test_month_key() {
    assert_eq!(month_key(date(2025, 1, 9)), "2025-01");
}

proptest! {
    /// Monthly groups partition the flows: their sums equal the overall summary.
    #[test]
    fn prop_finance_months_sum_to_summary(
        amounts in prop::collection::vec((1i64..1_000_000i64, 1u32..=12, 0usize..4), 0..50),
    ) {
        let entries: Vec<FinanceEntry> = amounts
            .iter()
            .enumerate()
            .map(|(i, (cents, month, kind))| {
                entry(
                    &format!("E-{i}"),
                    "A",
                    EntryKind::ALL[*kind],
                    Decimal::new(*cents, 2),
                    date(2025, *month, 15),
                )
            })
            .collect();

        let total = ReportService::finance_summary(&entries);
        let months = ReportService::finance_by_month(&entries);
        prop_assert_eq!(months.iter().map(|m| m.summary.advance_in).sum::<Decimal>(), total.advance_in);
        prop_assert_eq!(months.iter().map(|m| m.summary.advance_out).sum::<Decimal>(), total.advance_out);
        prop_assert_eq!(months.iter().map(|m| m.summary.due_in).sum::<Decimal>(), total.due_in);
        prop_assert_eq!(months.iter().map(|m| m.summary.due_out).sum::<Decimal>(), total.due_out);
        prop_assert!(months.windows(2).all(|w| w[0].month > w[1].month));
    }
}

//! Report generation service.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::error::ReportError;
use super::types::{
    ActiveBalance, ActiveBalanceReport, Dashboard, FinanceMonth, FinanceSummary, InvoiceSummary,
    OrderMonth, OrdersSummary, PipelineSummary,
};
use crate::ledger::balance::fold_balances;
use crate::ledger::{Book, EntryKind, FinanceEntry};
use crate::order::OrderRecord;
use crate::shipment::ShipmentEntry;

/// Month key of a date, `YYYY-MM`.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn parse_month(month: &str) -> Result<NaiveDate, ReportError> {
    let month = month.trim();
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .ok()
        .filter(|_| month.len() == 7)
        .ok_or_else(|| ReportError::InvalidMonth(month.to_string()))
}

/// Service for generating reports from orders, invoices, shipments and the
/// ledger. Tile orders and invoices are told apart by their kind.
pub struct ReportService;

impl ReportService {
    /// Σ sft and amount over tile orders.
    #[must_use]
    pub fn orders_summary(orders: &[OrderRecord]) -> OrdersSummary {
        Self::sum_orders(orders.iter().filter(|o| o.kind.is_tile_order()))
    }

    /// Σ net and rest over invoices. Overpaid invoices lower the pending total.
    #[must_use]
    pub fn invoice_summary(invoices: &[OrderRecord]) -> InvoiceSummary {
        invoices
            .iter()
            .filter(|o| !o.kind.is_tile_order())
            .fold(InvoiceSummary::default(), |mut acc, invoice| {
                acc.net += invoice.totals.net;
                acc.pending += invoice.totals.rest;
                acc.count += 1;
                acc
            })
    }

    /// Shipment counts.
    #[must_use]
    pub fn pipeline_summary(shipments: &[ShipmentEntry]) -> PipelineSummary {
        PipelineSummary {
            total: shipments.len(),
            unloaded: shipments.iter().filter(|s| s.is_unloaded()).count(),
        }
    }

    /// Σ amount per entry kind.
    #[must_use]
    pub fn finance_summary(entries: &[FinanceEntry]) -> FinanceSummary {
        Self::sum_finance(entries.iter())
    }

    /// Tile orders grouped by month, newest first.
    #[must_use]
    pub fn orders_by_month(orders: &[OrderRecord]) -> Vec<OrderMonth> {
        let mut months: BTreeMap<String, (NaiveDate, Vec<&OrderRecord>)> = BTreeMap::new();
        for order in orders.iter().filter(|o| o.kind.is_tile_order()) {
            months
                .entry(month_key(order.date))
                .or_insert_with(|| (order.date, Vec::new()))
                .1
                .push(order);
        }

        months
            .into_iter()
            .rev()
            .map(|(month, (date, orders))| OrderMonth {
                month,
                label: month_label(date),
                summary: Self::sum_orders(orders.into_iter()),
            })
            .collect()
    }

    /// Ledger flows grouped by month, newest first.
    #[must_use]
    pub fn finance_by_month(entries: &[FinanceEntry]) -> Vec<FinanceMonth> {
        let mut months: BTreeMap<String, (NaiveDate, Vec<&FinanceEntry>)> = BTreeMap::new();
        for entry in entries {
            months
                .entry(month_key(entry.date))
                .or_insert_with(|| (entry.date, Vec::new()))
                .1
                .push(entry);
        }

        months
            .into_iter()
            .rev()
            .map(|(month, (date, entries))| FinanceMonth {
                month,
                label: month_label(date),
                summary: Self::sum_finance(entries.into_iter()),
            })
            .collect()
    }

    /// Parties with a positive balance in `book`, in name order.
    #[must_use]
    pub fn active_balances(entries: &[FinanceEntry], book: Book) -> ActiveBalanceReport {
        let parties: Vec<ActiveBalance> = fold_balances(entries)
            .into_values()
            .filter(|b| b.balance(book) > Decimal::ZERO)
            .map(|b| ActiveBalance {
                balance: b.balance(book),
                party: b.party,
                phone: b.phone,
                last_date: b.last_date,
            })
            .collect();

        ActiveBalanceReport {
            book,
            total: parties.iter().map(|p| p.balance).sum(),
            parties,
        }
    }

    /// Entries of one book in a `YYYY-MM` month, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMonth` if `month` is not `YYYY-MM`.
    pub fn monthly_transactions<'a>(
        entries: &'a [FinanceEntry],
        month: &str,
        book: Book,
    ) -> Result<Vec<&'a FinanceEntry>, ReportError> {
        let first = parse_month(month)?;
        let mut selected: Vec<&FinanceEntry> = entries
            .iter()
            .filter(|e| e.kind.book() == book)
            .filter(|e| e.date.year() == first.year() && e.date.month() == first.month())
            .collect();
        selected.sort_by_key(|e| e.date);
        Ok(selected)
    }

    /// Builds every summary at once.
    #[must_use]
    pub fn dashboard(
        records: &[OrderRecord],
        shipments: &[ShipmentEntry],
        entries: &[FinanceEntry],
    ) -> Dashboard {
        tracing::debug!(
            records = records.len(),
            shipments = shipments.len(),
            entries = entries.len(),
            "building dashboard"
        );
        Dashboard {
            orders: Self::orders_summary(records),
            invoices: Self::invoice_summary(records),
            pipeline: Self::pipeline_summary(shipments),
            finance: Self::finance_summary(entries),
            order_months: Self::orders_by_month(records),
            finance_months: Self::finance_by_month(entries),
            active_advances: Self::active_balances(entries, Book::Advance),
            active_dues: Self::active_balances(entries, Book::Due),
        }
    }

    fn sum_orders<'a>(orders: impl Iterator<Item = &'a OrderRecord>) -> OrdersSummary {
        orders.fold(OrdersSummary::default(), |mut acc, order| {
            acc.sft += order.totals.sft;
            acc.amount += order.totals.amount();
            acc.count += 1;
            acc
        })
    }

    fn sum_finance<'a>(entries: impl Iterator<Item = &'a FinanceEntry>) -> FinanceSummary {
        entries.fold(FinanceSummary::default(), |mut acc, entry| {
            match entry.kind {
                EntryKind::AdvanceReceipt => acc.advance_in += entry.amount,
                EntryKind::AdvanceAdjustment => acc.advance_out += entry.amount,
                EntryKind::DueCreated => acc.due_in += entry.amount,
                EntryKind::DuePayment => acc.due_out += entry.amount,
            }
            acc
        })
    }
}

//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::Book;

/// Tile order volume.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OrdersSummary {
    /// Σ sft.
    pub sft: Decimal,
    /// Σ order amount (line subtotal).
    pub amount: Decimal,
    /// Number of orders.
    pub count: usize,
}

/// Invoice takings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InvoiceSummary {
    /// Σ net payable.
    pub net: Decimal,
    /// Σ remaining balances.
    pub pending: Decimal,
    /// Number of invoices.
    pub count: usize,
}

/// Shipment pipeline progress.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PipelineSummary {
    /// Number of shipments.
    pub total: usize,
    /// Number unloaded.
    pub unloaded: usize,
}

/// Ledger flows, summed over entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FinanceSummary {
    /// Σ advance receipts.
    pub advance_in: Decimal,
    /// Σ advance adjustments.
    pub advance_out: Decimal,
    /// Σ dues created.
    pub due_in: Decimal,
    /// Σ due payments.
    pub due_out: Decimal,
}

/// Tile orders of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMonth {
    /// `YYYY-MM`.
    pub month: String,
    /// Display label, e.g. `March 2025`.
    pub label: String,
    /// Σ sft, amount and count for the month.
    #[serde(flatten)]
    pub summary: OrdersSummary,
}

/// Ledger flows of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinanceMonth {
    /// `YYYY-MM`.
    pub month: String,
    /// Display label.
    pub label: String,
    /// Flows for the month.
    #[serde(flatten)]
    pub summary: FinanceSummary,
}

/// A party with an open balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveBalance {
    /// Party name.
    pub party: String,
    /// Party phone.
    pub phone: String,
    /// Balance in the report's book.
    pub balance: Decimal,
    /// Latest entry date of the party.
    pub last_date: Option<NaiveDate>,
}

/// Parties with a positive balance in one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveBalanceReport {
    /// Book reported on.
    pub book: Book,
    /// Parties in name order.
    pub parties: Vec<ActiveBalance>,
    /// Σ balances.
    pub total: Decimal,
}

/// Everything the reports screen shows at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Tile orders.
    pub orders: OrdersSummary,
    /// Invoices.
    pub invoices: InvoiceSummary,
    /// Shipments.
    pub pipeline: PipelineSummary,
    /// Ledger flows.
    pub finance: FinanceSummary,
    /// Monthly tile orders, newest first.
    pub order_months: Vec<OrderMonth>,
    /// Monthly ledger flows, newest first.
    pub finance_months: Vec<FinanceMonth>,
    /// Open advances.
    pub active_advances: ActiveBalanceReport,
    /// Open dues.
    pub active_dues: ActiveBalanceReport,
}

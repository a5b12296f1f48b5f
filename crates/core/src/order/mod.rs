//! Orders and invoices.
//!
//! This module implements order computation:
//! - Order kinds, line groups and lines
//! - Per-line figures (SFT, boxes, amounts)
//! - Totals aggregation with adjustments
//! - Persisted snapshots with cache-coherence checks

pub mod calculator;
pub mod record;
pub mod totals;
pub mod types;

#[cfg(test)]
mod totals_props;

pub use calculator::OrderCalculator;
pub use record::{OrderRecord, PartyInfo, TransitFlag};
pub use totals::{GroupTotals, OrderTotals};
pub use types::{Adjustments, GroupName, LineFigures, LineGroup, OrderKind, OrderLine};

//! Business reports.
//!
//! This module provides pure report logic over the persisted collections:
//! - Order, invoice, pipeline and finance summaries
//! - Monthly groupings (newest first)
//! - Active advance and due balances
//! - Monthly transaction listings

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use service::{ReportService, month_key};
pub use types::*;

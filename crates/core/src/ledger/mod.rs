//! Advance/due ledger.
//!
//! This module implements the party ledger:
//! - Ledger entries in two books (advance, due)
//! - Balance folds per party
//! - Business rule validation and party eligibility
//! - Error types for ledger operations
//! - Ledger engine for recording, removal and search
//! - Optional materialised balance cache

pub mod balance;
pub mod cache;
pub mod entry;
pub mod error;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod validation_props;

pub use balance::{Balances, PartyBalance};
pub use cache::BalanceCache;
pub use entry::{Book, EntryKind, FinanceEntry, NewEntry};
pub use error::LedgerError;
pub use service::LedgerEngine;
pub use validation::Eligibility;

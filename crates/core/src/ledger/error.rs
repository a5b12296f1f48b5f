//! Ledger error types.
//!
//! Balance-exceeded conditions are recoverable validation results carrying
//! the maximum allowed amount; the entry is never recorded.

use rust_decimal::Decimal;
use thiserror::Error;
use tilebook_shared::AppError;

/// Errors that can occur while validating or recording a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Party name is blank.
    #[error("Party name is required")]
    MissingParty,

    /// Amount is zero or negative.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Advance adjustment larger than the party's advance balance.
    #[error("Adjustment exceeds balance. Max: {max}")]
    AdjustmentExceedsBalance {
        /// Party name.
        party: String,
        /// Requested amount.
        requested: Decimal,
        /// Current advance balance.
        max: Decimal,
    },

    /// Due payment larger than the party's due balance.
    #[error("Payment exceeds due balance. Max: {max}")]
    PaymentExceedsDue {
        /// Party name.
        party: String,
        /// Requested amount.
        requested: Decimal,
        /// Current due balance.
        max: Decimal,
    },

    /// No entry with the given id.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
}

impl LedgerError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParty => "MISSING_PARTY",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::AdjustmentExceedsBalance { .. } => "ADJUSTMENT_EXCEEDS_BALANCE",
            Self::PaymentExceedsDue { .. } => "PAYMENT_EXCEEDS_DUE",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
        }
    }

    /// Maximum allowed amount for balance-exceeded errors.
    #[must_use]
    pub fn max_allowed(&self) -> Option<Decimal> {
        match self {
            Self::AdjustmentExceedsBalance { max, .. } | Self::PaymentExceedsDue { max, .. } => {
                Some(*max)
            }
            _ => None,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::MissingParty | LedgerError::NonPositiveAmount(_) => {
                Self::Validation(err.to_string())
            }
            LedgerError::AdjustmentExceedsBalance { .. } | LedgerError::PaymentExceedsDue { .. } => {
                Self::BusinessRule(err.to_string())
            }
            LedgerError::EntryNotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}

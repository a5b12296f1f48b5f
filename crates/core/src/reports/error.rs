//! Report error types.

use thiserror::Error;
use tilebook_shared::AppError;

/// Errors that can occur during report generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Month key is not `YYYY-MM`.
    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),
}

impl ReportError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMonth(_) => "INVALID_MONTH",
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Validation(err.to_string())
    }
}

//! Reference table errors.

use thiserror::Error;
use tilebook_shared::AppError;

/// Errors raised while building or querying reference tables.
///
/// These indicate corrupt static configuration, never a bad user entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A size key with a missing dimension was used as a table key.
    #[error("Invalid size key: {0}")]
    InvalidSize(String),

    /// A packing entry declares zero pieces per box.
    #[error("Pieces per box must be positive for size {0}")]
    ZeroPacking(String),

    /// Two overrides target the same model (or series) and size.
    #[error("Duplicate packing override for {matcher} at {size}")]
    DuplicateOverride {
        /// Description of the model matcher.
        matcher: String,
        /// Size the override applies to.
        size: String,
    },

    /// An override names neither or both of model and series.
    #[error("Packing override at {0} must name exactly one of model or series")]
    AmbiguousOverride(String),

    /// Model is not in the catalog.
    #[error("Unknown tile model: {0}")]
    UnknownModel(String),

    /// A rate in the configuration is negative.
    #[error("Negative rate for {0}")]
    NegativeRate(String),
}

impl CatalogError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSize(_) => "INVALID_SIZE",
            Self::ZeroPacking(_) => "ZERO_PACKING",
            Self::DuplicateOverride { .. } => "DUPLICATE_OVERRIDE",
            Self::AmbiguousOverride(_) => "AMBIGUOUS_OVERRIDE",
            Self::UnknownModel(_) => "UNKNOWN_MODEL",
            Self::NegativeRate(_) => "NEGATIVE_RATE",
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownModel(_) => Self::NotFound(err.to_string()),
            _ => Self::Config(err.to_string()),
        }
    }
}

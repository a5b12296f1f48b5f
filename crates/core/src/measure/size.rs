//! Tile size keys.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key identifying a tile size, e.g. `24X24` or `10.5X12`.
///
/// Keys are stored upper-cased so `20x20` and `20X20` name the same size.
/// A line with a missing dimension gets the sentinel key `X`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SizeKey(String);

impl SizeKey {
    /// Sentinel used when either dimension is missing.
    pub const EMPTY: &'static str = "X";

    /// Parses a size key, normalising case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let key = value.trim().to_uppercase();
        if key.is_empty() {
            Self(Self::EMPTY.to_string())
        } else {
            Self(key)
        }
    }

    /// Builds the key for a pair of dimensions.
    ///
    /// Trailing zeros are dropped so `24.00 x 24` yields `24X24`.
    #[must_use]
    pub fn from_dimensions(length: Decimal, width: Decimal) -> Self {
        if length.is_zero() || width.is_zero() {
            return Self(Self::EMPTY.to_string());
        }
        Self(format!("{}X{}", length.normalize(), width.normalize()))
    }

    /// Returns true for the missing-dimension sentinel.
    #[must_use]
    pub fn is_empty_dimension(&self) -> bool {
        self.0 == Self::EMPTY
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SizeKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for SizeKey {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<SizeKey> for String {
    fn from(key: SizeKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for SizeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//! Typed document identifiers.
//!
//! Identifiers are opaque, human-readable strings such as `ADV-0412` or
//! `ORD-05-Mar-25-K7Q`. Wrapping them prevents passing a shipment id where a
//! ledger entry id is expected. Uniqueness is the generator's concern.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier cannot be empty")]
pub struct EmptyIdError;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from an existing string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = EmptyIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(EmptyIdError);
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id!(EntryId, "Identifier of an advance/due ledger entry (`ADV-####`, `DUE-####`).");
typed_id!(RecordId, "Identifier of a persisted order or invoice record.");
typed_id!(ShipmentId, "Identifier of a factory sales-order shipment (`SO-R-XXXX`).");
typed_id!(TruckRef, "Reference assigned when a truck is put on a shipment (`TRK-XXXX`).");

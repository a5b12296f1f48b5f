//! Shipment error types.

use thiserror::Error;
use tilebook_shared::AppError;
use tilebook_shared::types::ShipmentId;

use super::types::ShipmentStatus;

/// Errors that can occur during shipment operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShipmentError {
    /// No order was selected.
    #[error("Order reference is required")]
    MissingOrderRef,

    /// The factory SO document was not supplied.
    #[error("Factory SO document is required")]
    MissingSoDocument,

    /// The order already has a shipment.
    #[error("Order {0} already has a shipment")]
    OrderAlreadyShipped(String),

    /// Truck number was blank.
    #[error("Truck number is required")]
    MissingTruckNumber,

    /// The shipment has been unloaded and can no longer change.
    #[error("Shipment {id} is {status} and cannot be modified")]
    AlreadyUnloaded {
        /// Shipment id.
        id: ShipmentId,
        /// Current status.
        status: ShipmentStatus,
    },

    /// Shipment not found.
    #[error("Shipment {0} not found")]
    NotFound(String),
}

impl ShipmentError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOrderRef => "MISSING_ORDER_REF",
            Self::MissingSoDocument => "MISSING_SO_DOCUMENT",
            Self::OrderAlreadyShipped(_) => "ORDER_ALREADY_SHIPPED",
            Self::MissingTruckNumber => "MISSING_TRUCK_NUMBER",
            Self::AlreadyUnloaded { .. } => "SHIPMENT_UNLOADED",
            Self::NotFound(_) => "SHIPMENT_NOT_FOUND",
        }
    }
}

impl From<ShipmentError> for AppError {
    fn from(err: ShipmentError) -> Self {
        match err {
            ShipmentError::MissingOrderRef
            | ShipmentError::MissingSoDocument
            | ShipmentError::MissingTruckNumber => Self::Validation(err.to_string()),
            ShipmentError::OrderAlreadyShipped(_) | ShipmentError::AlreadyUnloaded { .. } => {
                Self::BusinessRule(err.to_string())
            }
            ShipmentError::NotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}

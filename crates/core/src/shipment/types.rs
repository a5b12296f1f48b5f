//! Shipment domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tilebook_shared::types::{RecordId, ShipmentId, TruckRef};

/// Shipment status.
///
/// The valid transitions are:
/// - SoReady → TruckAssigned (assign truck)
/// - TruckAssigned → TruckAssigned (reassign truck)
/// - SoReady | TruckAssigned → Unloaded (unload)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    /// SO document received, no truck yet.
    SoReady,
    /// A truck is on the shipment.
    TruckAssigned,
    /// Goods unloaded at the destination (terminal).
    Unloaded,
}

impl ShipmentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SoReady => "so_ready",
            Self::TruckAssigned => "truck_assigned",
            Self::Unloaded => "unloaded",
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Unloaded)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One factory SO and its delivery progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentEntry {
    /// Shipment id (`SO-R-XXXX`).
    pub id: ShipmentId,
    /// Id of the order being shipped.
    pub order_ref: RecordId,
    /// SO date.
    pub date: NaiveDate,
    /// Current status.
    pub status: ShipmentStatus,
    /// Truck number plate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_no: Option<String>,
    /// Reference of the current truck assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_ref: Option<TruckRef>,
    /// Name of the factory SO document.
    pub so_document: String,
    /// Name of the unload slip, once unloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unload_document: Option<String>,
    /// Remarks recorded at unload.
    #[serde(default)]
    pub unload_remarks: String,
}

impl ShipmentEntry {
    /// Returns true once the shipment is unloaded.
    #[must_use]
    pub const fn is_unloaded(&self) -> bool {
        self.status.is_terminal()
    }
}

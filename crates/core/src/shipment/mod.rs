//! Factory sales-order (SO) shipment tracking.
//!
//! A shipment is opened against an order once the factory SO document is in
//! hand, gets a truck assigned, and is finally marked unloaded.

pub mod error;
pub mod service;
pub mod types;

pub use error::ShipmentError;
pub use service::ShipmentService;
pub use types::{ShipmentEntry, ShipmentStatus};

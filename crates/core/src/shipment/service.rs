//! Shipment state transitions.

use chrono::NaiveDate;
use std::collections::HashSet;
use tilebook_shared::types::{RecordId, TruckRef};

use super::error::ShipmentError;
use super::types::{ShipmentEntry, ShipmentStatus};
use crate::ids::IdGenerator;
use crate::order::OrderRecord;

/// Stateless service for the shipment pipeline.
pub struct ShipmentService;

impl ShipmentService {
    /// Opens a shipment for an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order reference or SO document is blank, or
    /// the order already has a shipment in `existing`.
    pub fn open(
        order_ref: &str,
        date: NaiveDate,
        so_document: &str,
        existing: &[ShipmentEntry],
        ids: &dyn IdGenerator,
    ) -> Result<ShipmentEntry, ShipmentError> {
        let order_ref = order_ref.trim();
        if order_ref.is_empty() {
            return Err(ShipmentError::MissingOrderRef);
        }
        if so_document.trim().is_empty() {
            return Err(ShipmentError::MissingSoDocument);
        }
        if existing.iter().any(|s| s.order_ref.as_str() == order_ref) {
            return Err(ShipmentError::OrderAlreadyShipped(order_ref.to_string()));
        }

        let entry = ShipmentEntry {
            id: ids.shipment_id(),
            order_ref: RecordId::new(order_ref),
            date,
            status: ShipmentStatus::SoReady,
            truck_no: None,
            truck_ref: None,
            so_document: so_document.trim().to_string(),
            unload_document: None,
            unload_remarks: String::new(),
        };
        tracing::info!(shipment_id = %entry.id, order_ref, "shipment opened");
        Ok(entry)
    }

    /// Puts a truck on the shipment. Reassigning replaces the number and ref.
    ///
    /// # Errors
    ///
    /// Returns an error if the truck number is blank or the shipment is
    /// already unloaded.
    pub fn assign_truck(
        shipment: &mut ShipmentEntry,
        truck_no: &str,
        truck_ref: TruckRef,
    ) -> Result<(), ShipmentError> {
        let truck_no = truck_no.trim();
        if truck_no.is_empty() {
            return Err(ShipmentError::MissingTruckNumber);
        }
        Self::ensure_open(shipment)?;

        shipment.truck_no = Some(truck_no.to_string());
        shipment.truck_ref = Some(truck_ref);
        shipment.status = ShipmentStatus::TruckAssigned;
        tracing::info!(shipment_id = %shipment.id, truck_no, "truck assigned");
        Ok(())
    }

    /// Records the unload. Unloaded is terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the shipment is already unloaded.
    pub fn mark_unloaded(
        shipment: &mut ShipmentEntry,
        remarks: &str,
        document: Option<String>,
    ) -> Result<(), ShipmentError> {
        Self::ensure_open(shipment)?;

        shipment.status = ShipmentStatus::Unloaded;
        shipment.unload_remarks = remarks.trim().to_string();
        shipment.unload_document = document.filter(|d| !d.trim().is_empty());
        tracing::info!(shipment_id = %shipment.id, "shipment unloaded");
        Ok(())
    }

    /// Finds a shipment by id for modification.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no shipment has the id.
    pub fn find_mut<'a>(
        shipments: &'a mut [ShipmentEntry],
        id: &str,
    ) -> Result<&'a mut ShipmentEntry, ShipmentError> {
        shipments
            .iter_mut()
            .find(|s| s.id.as_str() == id)
            .ok_or_else(|| ShipmentError::NotFound(id.to_string()))
    }

    /// Orders not yet referenced by any shipment, in input order.
    #[must_use]
    pub fn available_orders<'a>(
        orders: &'a [OrderRecord],
        shipments: &[ShipmentEntry],
    ) -> Vec<&'a OrderRecord> {
        let shipped: HashSet<&str> = shipments.iter().map(|s| s.order_ref.as_str()).collect();
        orders
            .iter()
            .filter(|o| !shipped.contains(o.id.as_str()))
            .collect()
    }

    /// Shipments whose order ref, id or truck number contains `query`
    /// (case-insensitive).
    #[must_use]
    pub fn search<'a>(shipments: &'a [ShipmentEntry], query: &str) -> Vec<&'a ShipmentEntry> {
        let query = query.trim().to_lowercase();
        shipments
            .iter()
            .filter(|s| {
                query.is_empty()
                    || s.order_ref.as_str().to_lowercase().contains(&query)
                    || s.id.as_str().to_lowercase().contains(&query)
                    || s.truck_no
                        .as_deref()
                        .is_some_and(|t| t.to_lowercase().contains(&query))
            })
            .collect()
    }

    fn ensure_open(shipment: &ShipmentEntry) -> Result<(), ShipmentError> {
        if shipment.status.is_terminal() {
            return Err(ShipmentError::AlreadyUnloaded {
                id: shipment.id.clone(),
                status: shipment.status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequenceIdGenerator;
    use crate::order::{OrderKind, PartyInfo};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn order(id: &str) -> OrderRecord {
        OrderRecord::new(RecordId::new(id), OrderKind::Warehouse, date(), PartyInfo::default())
    }

    #[test]
    fn test_lifecycle() {
        let ids = SequenceIdGenerator::new();
        let mut shipment =
            ShipmentService::open("ORD-05-Mar-25-K7Q", date(), "so-1182.pdf", &[], &ids).unwrap();
        assert_eq!(shipment.id.as_str(), "SO-R-0001");
        assert_eq!(shipment.status, ShipmentStatus::SoReady);
        assert!(!shipment.is_unloaded());

        ShipmentService::assign_truck(&mut shipment, " DHAKA-METRO-11-2345 ", ids.truck_ref())
            .unwrap();
        assert_eq!(shipment.status, ShipmentStatus::TruckAssigned);
        assert_eq!(shipment.truck_no.as_deref(), Some("DHAKA-METRO-11-2345"));
        assert_eq!(shipment.truck_ref, Some(TruckRef::new("TRK-0002")));

        // Reassignment replaces number and ref.
        ShipmentService::assign_truck(&mut shipment, "CTG-TA-22", ids.truck_ref()).unwrap();
        assert_eq!(shipment.truck_no.as_deref(), Some("CTG-TA-22"));
        assert_eq!(shipment.truck_ref, Some(TruckRef::new("TRK-0003")));

        ShipmentService::mark_unloaded(&mut shipment, "2 boxes broken", Some("slip.pdf".into()))
            .unwrap();
        assert!(shipment.is_unloaded());
        assert_eq!(shipment.unload_remarks, "2 boxes broken");
        assert_eq!(shipment.unload_document.as_deref(), Some("slip.pdf"));
    }

    #[test]
    fn test_open_requires_order_and_document() {
        let ids = SequenceIdGenerator::new();
        assert_eq!(
            ShipmentService::open(" ", date(), "so.pdf", &[], &ids),
            Err(ShipmentError::MissingOrderRef)
        );
        assert_eq!(
            ShipmentService::open("ORD-1", date(), "", &[], &ids),
            Err(ShipmentError::MissingSoDocument)
        );
    }

    #[test]
    fn test_open_rejects_shipped_order() {
        let ids = SequenceIdGenerator::new();
        let first = ShipmentService::open("ORD-1", date(), "so.pdf", &[], &ids).unwrap();
        assert_eq!(
            ShipmentService::open("ORD-1", date(), "so2.pdf", &[first], &ids),
            Err(ShipmentError::OrderAlreadyShipped("ORD-1".into()))
        );
    }

    #[test]
    fn test_unloaded_is_terminal() {
        let ids = SequenceIdGenerator::new();
        let mut shipment = ShipmentService::open("ORD-1", date(), "so.pdf", &[], &ids).unwrap();
        ShipmentService::mark_unloaded(&mut shipment, "", None).unwrap();
        assert_eq!(shipment.unload_document, None);

        let err = ShipmentService::assign_truck(&mut shipment, "T-1", ids.truck_ref()).unwrap_err();
        assert_eq!(err.error_code(), "SHIPMENT_UNLOADED");
        assert!(ShipmentService::mark_unloaded(&mut shipment, "again", None).is_err());
        assert_eq!(shipment.unload_remarks, "");
    }

    #[test]
    fn test_blank_truck_number_rejected() {
        let ids = SequenceIdGenerator::new();
        let mut shipment = ShipmentService::open("ORD-1", date(), "so.pdf", &[], &ids).unwrap();
        assert_eq!(
            ShipmentService::assign_truck(&mut shipment, "  ", ids.truck_ref()),
            Err(ShipmentError::MissingTruckNumber)
        );
        assert_eq!(shipment.status, ShipmentStatus::SoReady);
    }

    #[test]
    fn test_available_orders() {
        let ids = SequenceIdGenerator::new();
        let orders = vec![order("ORD-1"), order("ORD-2"), order("ORD-3")];
        let shipments = vec![ShipmentService::open("ORD-2", date(), "so.pdf", &[], &ids).unwrap()];

        let available: Vec<&str> = ShipmentService::available_orders(&orders, &shipments)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(available, vec!["ORD-1", "ORD-3"]);
    }

    #[test]
    fn test_search_and_find() {
        let ids = SequenceIdGenerator::new();
        let mut shipments = vec![
            ShipmentService::open("ORD-A", date(), "a.pdf", &[], &ids).unwrap(),
            ShipmentService::open("ORD-B", date(), "b.pdf", &[], &ids).unwrap(),
        ];
        let second = ShipmentService::find_mut(&mut shipments, "SO-R-0002").unwrap();
        ShipmentService::assign_truck(second, "Dhaka-KA-77", ids.truck_ref()).unwrap();

        assert_eq!(ShipmentService::search(&shipments, "ord-a").len(), 1);
        assert_eq!(ShipmentService::search(&shipments, "so-r-").len(), 2);
        assert_eq!(ShipmentService::search(&shipments, "ka-77")[0].id.as_str(), "SO-R-0002");
        assert_eq!(ShipmentService::search(&shipments, "").len(), 2);
        assert_eq!(
            ShipmentService::find_mut(&mut shipments, "SO-R-9").unwrap_err(),
            ShipmentError::NotFound("SO-R-9".into())
        );
    }
}

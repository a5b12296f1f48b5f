//! Document identifier generation.
//!
//! Identifiers are opaque to the engine; uniqueness is the generator's job.
//! The clock generator reproduces the document formats in use:
//!
//! - finance entries: `ADV-####`, `DUE-####` (last four digits of the
//!   millisecond clock)
//! - invoices: `CT#####` (last five digits)
//! - tile orders: `ORD-{dd}-{Mon}-{yy}-XXX`
//! - shipments: `SO-R-XXXX`, trucks: `TRK-XXXX`

use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};
use tilebook_shared::types::{EntryId, RecordId, ShipmentId, TruckRef};
use uuid::Uuid;

use crate::ledger::Book;

const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of new document identifiers.
pub trait IdGenerator {
    /// Id for a new ledger entry in `book`.
    fn entry_id(&self, book: Book) -> EntryId;
    /// Id for a new invoice.
    fn invoice_id(&self) -> RecordId;
    /// Id for a new tile order dated `date`.
    fn order_id(&self, date: NaiveDate) -> RecordId;
    /// Id for a new shipment.
    fn shipment_id(&self) -> ShipmentId;
    /// Reference for a truck assignment.
    fn truck_ref(&self) -> TruckRef;
}

/// Formats a tile order id from its date and a short code.
#[must_use]
pub fn order_id_for(date: NaiveDate, code: &str) -> RecordId {
    RecordId::new(format!("ORD-{}-{code}", date.format("%d-%b-%y")))
}

/// Generator based on the wall clock and random codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockIdGenerator;

impl ClockIdGenerator {
    fn last_digits(width: u32) -> String {
        let modulus = 10i64.pow(width);
        let value = chrono::Utc::now().timestamp_millis().rem_euclid(modulus);
        format!("{value:0w$}", w = width as usize)
    }

    fn random_code(len: usize) -> String {
        let mut value = Uuid::new_v4().as_u128();
        let mut code = String::with_capacity(len);
        for _ in 0..len {
            // `value % 36` always fits the table.
            let digit = usize::try_from(value % 36).unwrap_or_default();
            code.push(char::from(BASE36[digit]));
            value /= 36;
        }
        code
    }
}

impl IdGenerator for ClockIdGenerator {
    fn entry_id(&self, book: Book) -> EntryId {
        EntryId::new(format!("{}-{}", book.id_prefix(), Self::last_digits(4)))
    }

    fn invoice_id(&self) -> RecordId {
        RecordId::new(format!("CT{}", Self::last_digits(5)))
    }

    fn order_id(&self, date: NaiveDate) -> RecordId {
        order_id_for(date, &Self::random_code(3))
    }

    fn shipment_id(&self) -> ShipmentId {
        ShipmentId::new(format!("SO-R-{}", Self::random_code(4)))
    }

    fn truck_ref(&self) -> TruckRef {
        TruckRef::new(format!("TRK-{}", Self::random_code(4)))
    }
}

/// Deterministic generator counting up from a start value.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    /// Creates a generator whose first id uses `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id uses `start`.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    fn bump(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn entry_id(&self, book: Book) -> EntryId {
        EntryId::new(format!("{}-{:04}", book.id_prefix(), self.bump()))
    }

    fn invoice_id(&self) -> RecordId {
        RecordId::new(format!("CT{:05}", self.bump()))
    }

    fn order_id(&self, date: NaiveDate) -> RecordId {
        order_id_for(date, &format!("{:03}", self.bump()))
    }

    fn shipment_id(&self) -> ShipmentId {
        ShipmentId::new(format!("SO-R-{:04}", self.bump()))
    }

    fn truck_ref(&self) -> TruckRef {
        TruckRef::new(format!("TRK-{:04}", self.bump()))
    }
}

//! Advance/due ledger entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tilebook_shared::types::EntryId;

/// One of the two ledger books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Book {
    /// Advances received from parties.
    Advance,
    /// Dues owed by parties.
    Due,
}

impl Book {
    /// Prefix of entry identifiers in this book.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Advance => "ADV",
            Self::Due => "DUE",
        }
    }

    /// Entry kinds that belong to this book.
    #[must_use]
    pub const fn kinds(self) -> [EntryKind; 2] {
        match self {
            Self::Advance => [EntryKind::AdvanceReceipt, EntryKind::AdvanceAdjustment],
            Self::Due => [EntryKind::DueCreated, EntryKind::DuePayment],
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Advance => write!(f, "advance"),
            Self::Due => write!(f, "due"),
        }
    }
}

impl std::str::FromStr for Book {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "advance" | "adv" => Ok(Self::Advance),
            "due" => Ok(Self::Due),
            _ => Err(format!("Unknown ledger book: {s}")),
        }
    }
}

/// Kind of ledger entry. Each kind moves exactly one party counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Advance received; raises the advance balance.
    #[serde(rename = "ADVANCE_ENTRY", alias = "ADVANCE_RECEIPT")]
    AdvanceReceipt,
    /// Advance consumed; lowers the advance balance.
    #[serde(rename = "ADVANCE_ADJ", alias = "ADVANCE_ADJUSTMENT")]
    AdvanceAdjustment,
    /// Due raised; raises the due balance.
    #[serde(rename = "DUE_ENTRY", alias = "DUE_CREATED")]
    DueCreated,
    /// Due collected; lowers the due balance.
    #[serde(rename = "DUE_PAYMENT")]
    DuePayment,
}

impl EntryKind {
    /// All kinds in display order.
    pub const ALL: [Self; 4] = [
        Self::AdvanceReceipt,
        Self::AdvanceAdjustment,
        Self::DueCreated,
        Self::DuePayment,
    ];

    /// Book the kind belongs to.
    #[must_use]
    pub const fn book(self) -> Book {
        match self {
            Self::AdvanceReceipt | Self::AdvanceAdjustment => Book::Advance,
            Self::DueCreated | Self::DuePayment => Book::Due,
        }
    }

    /// Returns true for kinds that draw down an existing balance.
    #[must_use]
    pub const fn draws_down(self) -> bool {
        matches!(self, Self::AdvanceAdjustment | Self::DuePayment)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AdvanceReceipt => "Advance Receipt",
            Self::AdvanceAdjustment => "Adjustment",
            Self::DueCreated => "Due Created",
            Self::DuePayment => "Collection",
        }
    }

    /// Persisted code, e.g. `ADVANCE_ADJ`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AdvanceReceipt => "ADVANCE_ENTRY",
            Self::AdvanceAdjustment => "ADVANCE_ADJ",
            Self::DueCreated => "DUE_ENTRY",
            Self::DuePayment => "DUE_PAYMENT",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "ADVANCE_ENTRY" | "ADVANCE_RECEIPT" => Ok(Self::AdvanceReceipt),
            "ADVANCE_ADJ" | "ADVANCE_ADJUSTMENT" => Ok(Self::AdvanceAdjustment),
            "DUE_ENTRY" | "DUE_CREATED" => Ok(Self::DueCreated),
            "DUE_PAYMENT" => Ok(Self::DuePayment),
            _ => Err(format!("Unknown entry kind: {s}")),
        }
    }
}

/// A recorded ledger entry. Append-only: never edited, only removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceEntry {
    /// Entry identifier (`ADV-####` / `DUE-####`).
    pub id: EntryId,
    /// Counterparty name.
    #[serde(alias = "partyName")]
    pub party_name: String,
    /// Counterparty phone.
    #[serde(default)]
    pub phone: String,
    /// Entry kind.
    #[serde(alias = "type")]
    pub kind: EntryKind,
    /// Amount, always positive.
    pub amount: Decimal,
    /// Entry date.
    pub date: NaiveDate,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: String,
}

/// A proposed entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Counterparty name.
    #[serde(alias = "partyName")]
    pub party_name: String,
    /// Counterparty phone.
    #[serde(default)]
    pub phone: String,
    /// Entry kind.
    #[serde(alias = "type")]
    pub kind: EntryKind,
    /// Amount.
    pub amount: Decimal,
    /// Entry date.
    pub date: NaiveDate,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: String,
}

impl NewEntry {
    /// Turns the proposal into a recorded entry with `id`.
    #[must_use]
    pub fn into_entry(self, id: EntryId) -> FinanceEntry {
        FinanceEntry {
            id,
            party_name: self.party_name.trim().to_string(),
            phone: self.phone,
            kind: self.kind,
            amount: self.amount,
            date: self.date,
            remarks: self.remarks,
        }
    }
}

//! Party balance calculations.
//!
//! A balance is a fold over the party's entries into four counters. The fold
//! is commutative: entry order never changes the counters.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entry::{Book, EntryKind, FinanceEntry};

/// Balances keyed by party name, in name order.
pub type Balances = BTreeMap<String, PartyBalance>;

/// Derived balance of one party. A view, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartyBalance {
    /// Party name.
    pub party: String,
    /// First non-empty phone seen for the party.
    pub phone: String,
    /// Σ advance receipts.
    pub advance_received: Decimal,
    /// Σ advance adjustments.
    pub advance_adjusted: Decimal,
    /// Σ dues created.
    pub due_created: Decimal,
    /// Σ due payments.
    pub due_paid: Decimal,
    /// Latest entry date.
    pub last_date: Option<NaiveDate>,
    /// Number of entries folded in.
    pub entry_count: usize,
}

impl PartyBalance {
    /// Creates an empty balance for a party.
    #[must_use]
    pub fn new(party: impl Into<String>) -> Self {
        Self {
            party: party.into(),
            ..Self::default()
        }
    }

    /// Routes one entry's amount to its counter.
    pub fn apply(&mut self, entry: &FinanceEntry) {
        match entry.kind {
            EntryKind::AdvanceReceipt => self.advance_received += entry.amount,
            EntryKind::AdvanceAdjustment => self.advance_adjusted += entry.amount,
            EntryKind::DueCreated => self.due_created += entry.amount,
            EntryKind::DuePayment => self.due_paid += entry.amount,
        }
        if self.phone.is_empty() && !entry.phone.trim().is_empty() {
            self.phone = entry.phone.trim().to_string();
        }
        self.last_date = self.last_date.max(Some(entry.date));
        self.entry_count += 1;
    }

    /// `Σ receipts - Σ adjustments`.
    #[must_use]
    pub fn advance_balance(&self) -> Decimal {
        self.advance_received - self.advance_adjusted
    }

    /// `Σ dues created - Σ payments`.
    #[must_use]
    pub fn due_balance(&self) -> Decimal {
        self.due_created - self.due_paid
    }

    /// Balance in one book.
    #[must_use]
    pub fn balance(&self, book: Book) -> Decimal {
        match book {
            Book::Advance => self.advance_balance(),
            Book::Due => self.due_balance(),
        }
    }
}

/// Normalised party key: surrounding whitespace is not significant.
#[must_use]
pub fn party_key(name: &str) -> &str {
    name.trim()
}

/// Folds every entry into per-party balances.
#[must_use]
pub fn fold_balances<'a>(entries: impl IntoIterator<Item = &'a FinanceEntry>) -> Balances {
    let mut balances = Balances::new();
    for entry in entries {
        let key = party_key(&entry.party_name);
        balances
            .entry(key.to_string())
            .or_insert_with(|| PartyBalance::new(key))
            .apply(entry);
    }
    balances
}

/// Folds one party's entries.
#[must_use]
pub fn fold_party(entries: &[FinanceEntry], party: &str) -> PartyBalance {
    let key = party_key(party);
    let mut balance = PartyBalance::new(key);
    for entry in entries.iter().filter(|e| party_key(&e.party_name) == key) {
        balance.apply(entry);
    }
    balance
}

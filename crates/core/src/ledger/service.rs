//! Ledger engine.
//!
//! Balances are always recomputed against the full entry list passed in. The
//! caller owns read-validate-write atomicity against its store.

use chrono::NaiveDate;

use super::balance::{Balances, PartyBalance, fold_balances, fold_party};
use super::entry::{Book, EntryKind, FinanceEntry, NewEntry};
use super::error::LedgerError;
use super::validation::{Eligibility, eligible_parties, validate_entry};
use crate::ids::IdGenerator;

/// Stateless ledger operations.
pub struct LedgerEngine;

impl LedgerEngine {
    /// Folds every entry into per-party balances.
    #[must_use]
    pub fn balances_as_of(entries: &[FinanceEntry]) -> Balances {
        fold_balances(entries)
    }

    /// Folds entries dated on or before `date`.
    #[must_use]
    pub fn balances_as_of_date(entries: &[FinanceEntry], date: NaiveDate) -> Balances {
        fold_balances(entries.iter().filter(|e| e.date <= date))
    }

    /// Balance of a single party.
    #[must_use]
    pub fn balance_for(entries: &[FinanceEntry], party: &str) -> PartyBalance {
        fold_party(entries, party)
    }

    /// Validates a proposed entry against current balances.
    ///
    /// # Errors
    ///
    /// See [`validate_entry`].
    pub fn validate(proposed: &NewEntry, balances: &Balances) -> Result<(), LedgerError> {
        validate_entry(proposed, balances)
    }

    /// Parties eligible for an entry kind.
    #[must_use]
    pub fn eligible_parties(kind: EntryKind, balances: &Balances) -> Eligibility {
        eligible_parties(kind, balances)
    }

    /// Validates a proposal and, if accepted, assigns it an id.
    ///
    /// The returned entry is not added anywhere; persisting it is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// Returns the validation error; no id is consumed in that case.
    pub fn record(
        proposed: NewEntry,
        balances: &Balances,
        ids: &dyn IdGenerator,
    ) -> Result<FinanceEntry, LedgerError> {
        if let Err(err) = validate_entry(&proposed, balances) {
            tracing::warn!(
                party = %proposed.party_name,
                kind = %proposed.kind,
                amount = %proposed.amount,
                error_code = err.error_code(),
                "ledger entry rejected"
            );
            return Err(err);
        }

        let id = ids.entry_id(proposed.kind.book());
        let entry = proposed.into_entry(id);
        tracing::info!(
            entry_id = %entry.id,
            party = %entry.party_name,
            kind = %entry.kind,
            amount = %entry.amount,
            "ledger entry accepted"
        );
        Ok(entry)
    }

    /// Removes an entry by id. Corrections are removals plus new entries.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound` if no entry has the id.
    pub fn remove(entries: &mut Vec<FinanceEntry>, id: &str) -> Result<FinanceEntry, LedgerError> {
        let position = entries
            .iter()
            .position(|e| e.id.as_str() == id)
            .ok_or_else(|| LedgerError::EntryNotFound(id.to_string()))?;
        Ok(entries.remove(position))
    }

    /// Entries of a book whose party name or id contains `query`
    /// (case-insensitive). `None` searches both books.
    #[must_use]
    pub fn search<'a>(
        entries: &'a [FinanceEntry],
        book: Option<Book>,
        query: &str,
    ) -> Vec<&'a FinanceEntry> {
        let query = query.trim().to_lowercase();
        entries
            .iter()
            .filter(|e| book.is_none_or(|b| e.kind.book() == b))
            .filter(|e| {
                query.is_empty()
                    || e.party_name.to_lowercase().contains(&query)
                    || e.id.as_str().to_lowercase().contains(&query)
            })
            .collect()
    }
}

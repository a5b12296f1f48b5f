//! Business rule validation for ledger entries.

use rust_decimal::Decimal;
use serde::Serialize;

use super::balance::{Balances, party_key};
use super::entry::{EntryKind, NewEntry};
use super::error::LedgerError;

/// Validates a proposed entry against balances computed before it.
///
/// # Errors
///
/// Returns an error if the party is blank, the amount is not positive, or a
/// draw-down exceeds the party's current balance in its book.
pub fn validate_entry(proposed: &NewEntry, balances: &Balances) -> Result<(), LedgerError> {
    let party = party_key(&proposed.party_name);
    if party.is_empty() {
        return Err(LedgerError::MissingParty);
    }
    if proposed.amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(proposed.amount));
    }

    let current = balances.get(party);
    match proposed.kind {
        EntryKind::AdvanceAdjustment => {
            let max = current.map_or(Decimal::ZERO, |b| b.advance_balance());
            if proposed.amount > max {
                return Err(LedgerError::AdjustmentExceedsBalance {
                    party: party.to_string(),
                    requested: proposed.amount,
                    max,
                });
            }
        }
        EntryKind::DuePayment => {
            let max = current.map_or(Decimal::ZERO, |b| b.due_balance());
            if proposed.amount > max {
                return Err(LedgerError::PaymentExceedsDue {
                    party: party.to_string(),
                    requested: proposed.amount,
                    max,
                });
            }
        }
        EntryKind::AdvanceReceipt | EntryKind::DueCreated => {}
    }

    Ok(())
}

/// Which parties an entry kind may be recorded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", content = "parties", rename_all = "snake_case")]
pub enum Eligibility {
    /// Any party, including new ones.
    Any,
    /// Only the listed parties (those with a positive balance).
    Parties(Vec<String>),
}

impl Eligibility {
    /// Returns true if `party` may be used.
    #[must_use]
    pub fn allows(&self, party: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Parties(parties) => parties.iter().any(|p| p == party_key(party)),
        }
    }
}

/// Parties eligible for an entry kind.
///
/// Adjustments need a positive advance balance, payments a positive due
/// balance; creation kinds are unrestricted.
#[must_use]
pub fn eligible_parties(kind: EntryKind, balances: &Balances) -> Eligibility {
    let book = kind.book();
    if !kind.draws_down() {
        return Eligibility::Any;
    }
    Eligibility::Parties(
        balances
            .values()
            .filter(|b| b.balance(book) > Decimal::ZERO)
            .map(|b| b.party.clone())
            .collect(),
    )
}

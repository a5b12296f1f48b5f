//! Persisted order snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tilebook_shared::types::RecordId;
use tilebook_shared::{AppError, AppResult};

use super::calculator::OrderCalculator;
use super::totals::OrderTotals;
use super::types::{Adjustments, GroupName, LineGroup, OrderKind, OrderLine};

/// Customer or party details printed on the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyInfo {
    /// Party name.
    pub name: String,
    /// Billing address.
    pub address: String,
    /// Delivery site address.
    pub site_address: String,
    /// Phone number.
    pub phone: String,
}

/// Direction of a tile-order transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitFlag {
    /// Warehouse to site.
    Wts,
    /// Site to warehouse.
    Stw,
}

/// An order or invoice as persisted: inputs plus a cached totals snapshot.
///
/// Persistence upserts records by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Record identifier.
    pub id: RecordId,
    /// Order kind.
    pub kind: OrderKind,
    /// Document date.
    pub date: NaiveDate,
    /// Party details.
    #[serde(default)]
    pub party: PartyInfo,
    /// Transit direction (tile orders).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit: Option<TransitFlag>,
    /// Purchase order or other external reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Salesperson name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesperson: Option<String>,
    /// Free-text remarks.
    #[serde(default)]
    pub remarks: String,
    /// Line groups.
    pub groups: Vec<LineGroup>,
    /// Adjustments on top of the subtotal.
    #[serde(default)]
    pub adjustments: Adjustments,
    /// Cached totals snapshot.
    #[serde(default)]
    pub totals: OrderTotals,
}

impl OrderRecord {
    /// Creates an empty record with the groups its kind carries.
    #[must_use]
    pub fn new(id: RecordId, kind: OrderKind, date: NaiveDate, party: PartyInfo) -> Self {
        Self {
            id,
            kind,
            date,
            party,
            transit: None,
            reference: None,
            salesperson: None,
            remarks: String::new(),
            groups: kind.groups().iter().copied().map(LineGroup::new).collect(),
            adjustments: Adjustments::default(),
            totals: OrderTotals::default(),
        }
    }

    /// Returns a group by name.
    #[must_use]
    pub fn group(&self, name: GroupName) -> Option<&LineGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Appends a line to a group.
    ///
    /// # Errors
    ///
    /// Returns a validation error if this kind of order has no such group.
    pub fn push_line(&mut self, group: GroupName, line: OrderLine) -> AppResult<()> {
        let kind = self.kind;
        let target = self
            .groups
            .iter_mut()
            .find(|g| g.name == group)
            .ok_or_else(|| {
                AppError::Validation(format!("{kind} orders have no {} group", group.label()))
            })?;
        target.lines.push(line);
        Ok(())
    }

    /// Iterates over every line of every group.
    pub fn lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.groups.iter().flat_map(|g| g.lines.iter())
    }

    /// Checks the record is complete enough to save.
    ///
    /// # Errors
    ///
    /// Returns a validation error if groups do not match the kind, an invoice
    /// has no client name, or there are no lines.
    pub fn validate_for_save(&self) -> AppResult<()> {
        let names: Vec<GroupName> = self.groups.iter().map(|g| g.name).collect();
        if names != self.kind.groups() {
            return Err(AppError::Validation(format!(
                "{} orders must carry groups {:?}",
                self.kind,
                self.kind.groups()
            )));
        }
        if self.kind == OrderKind::Invoice && self.party.name.trim().is_empty() {
            return Err(AppError::Validation("Client name is required".to_string()));
        }
        if self.lines().next().is_none() {
            return Err(AppError::Validation("Add at least one item".to_string()));
        }
        Ok(())
    }

    /// Recomputes totals from the lines without touching the snapshot.
    #[must_use]
    pub fn recompute(&self, calc: &OrderCalculator<'_>) -> OrderTotals {
        calc.totals(self.kind, &self.groups, &self.adjustments)
    }

    /// Replaces the cached snapshot with freshly computed totals.
    pub fn refresh_totals(&mut self, calc: &OrderCalculator<'_>) {
        self.totals = self.recompute(calc);
    }

    /// Returns true if the cached snapshot matches the lines.
    #[must_use]
    pub fn is_coherent(&self, calc: &OrderCalculator<'_>) -> bool {
        let fresh = self.recompute(calc);
        if fresh == self.totals {
            return true;
        }
        tracing::warn!(
            record_id = %self.id,
            cached_net = %self.totals.net,
            computed_net = %fresh.net,
            "cached totals disagree with lines"
        );
        false
    }

    /// Like [`Self::is_coherent`] but reports a conflict error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Conflict` if the snapshot is stale.
    pub fn ensure_coherent(&self, calc: &OrderCalculator<'_>) -> AppResult<()> {
        if self.is_coherent(calc) {
            Ok(())
        } else {
            Err(AppError::Conflict(format!(
                "cached totals of {} do not match its lines",
                self.id
            )))
        }
    }
}

//! Per-line and per-order computation.

use crate::measure::{Geometry, PackingTable, UnitConverter};
use crate::pricing::LineItemCalculator;

use super::totals::OrderTotals;
use super::types::{Adjustments, LineFigures, LineGroup, OrderKind, OrderLine};

/// Computes line figures and order totals against a packing table.
#[derive(Debug, Clone, Copy)]
pub struct OrderCalculator<'a> {
    converter: UnitConverter<'a>,
}

impl<'a> OrderCalculator<'a> {
    /// Creates a calculator over the packing table for the order's geometry.
    #[must_use]
    pub fn new(packing: &'a PackingTable) -> Self {
        Self {
            converter: UnitConverter::new(packing),
        }
    }

    /// Derives the figures of one line.
    ///
    /// Amounts are priced from the unrounded SFT.
    #[must_use]
    pub fn line_figures(&self, kind: OrderKind, line: &OrderLine) -> LineFigures {
        let conversion = match kind.geometry() {
            Geometry::Inch => self.converter.convert_for_model(
                line.length,
                line.width,
                line.quantity,
                line.model_name(),
            ),
            Geometry::Centimetre => self.converter.convert_boxes(
                line.length,
                line.width,
                line.quantity,
                line.size.as_ref(),
                line.model_name(),
            ),
        };
        let amounts =
            LineItemCalculator::compute(conversion.raw_sft, line.rate, line.discount_percent);
        LineFigures {
            conversion,
            amounts,
        }
    }

    /// Derives the figures of every line in a group, in order.
    #[must_use]
    pub fn group_figures(&self, kind: OrderKind, group: &LineGroup) -> Vec<LineFigures> {
        group
            .lines
            .iter()
            .map(|line| self.line_figures(kind, line))
            .collect()
    }

    /// Recomputes order totals over all groups.
    #[must_use]
    pub fn totals(
        &self,
        kind: OrderKind,
        groups: &[LineGroup],
        adjustments: &Adjustments,
    ) -> OrderTotals {
        let figures: Vec<_> = groups
            .iter()
            .map(|group| (group.name, self.group_figures(kind, group)))
            .collect();
        let borrowed: Vec<_> = figures
            .iter()
            .map(|(name, lines)| (*name, lines.as_slice()))
            .collect();
        OrderTotals::aggregate_groups(&borrowed, adjustments)
    }
}

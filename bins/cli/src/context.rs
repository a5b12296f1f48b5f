//! Reference tables built from configuration.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tilebook_core::measure::{Geometry, PackingTable};
use tilebook_core::order::{OrderKind, OrderLine, OrderRecord};
use tilebook_core::pricing::{Catalog, RateTable};
use tilebook_shared::{AppConfig, AppError};

/// Everything a command needs besides its own input files.
#[derive(Debug)]
pub struct CliContext {
    inch_packing: PackingTable,
    metric_packing: PackingTable,
    rates: RateTable,
    catalog: Catalog,
}

impl CliContext {
    /// Builds the reference tables from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let reference = &config.reference;
        let inch_packing = PackingTable::from_config(
            PackingTable::inch_default(),
            &reference.inch_packing,
            &reference.inch_overrides,
        )
        .map_err(AppError::from)
        .context("invalid inch packing table")?;
        let metric_packing = PackingTable::from_config(
            PackingTable::new(),
            &reference.metric_packing,
            &reference.metric_overrides,
        )
        .map_err(AppError::from)
        .context("invalid metric packing table")?;
        let rates = RateTable::from_config(&reference.special_rates, &reference.default_rates)
            .map_err(AppError::from)
            .context("invalid rate table")?;
        let catalog = Catalog::from_config(&reference.catalog)
            .map_err(AppError::from)
            .context("invalid catalog")?;

        tracing::debug!(
            inch_sizes = inch_packing.len(),
            metric_sizes = metric_packing.len(),
            catalog_models = catalog.len(),
            "reference tables loaded"
        );

        Ok(Self {
            inch_packing,
            metric_packing,
            rates,
            catalog,
        })
    }

    /// Packing table for an order kind's geometry.
    pub fn packing_for(&self, kind: OrderKind) -> &PackingTable {
        match kind.geometry() {
            Geometry::Inch => &self.inch_packing,
            Geometry::Centimetre => &self.metric_packing,
        }
    }

    /// Tile catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Completes lines that name a catalogued model but were entered
    /// without dimensions or rate.
    pub fn prefill(&self, record: &mut OrderRecord) {
        for line in record.groups.iter_mut().flat_map(|g| g.lines.iter_mut()) {
            self.prefill_line(line);
        }
    }

    fn prefill_line(&self, line: &mut OrderLine) {
        let Some(model) = line.model_name() else {
            return;
        };
        let Ok(prefill) = self.catalog.line_for(model, &self.rates) else {
            return;
        };
        if line.length.is_zero() || line.width.is_zero() {
            line.length = prefill.length;
            line.width = prefill.width;
            line.size.get_or_insert(prefill.size);
        }
        if line.rate == Decimal::ZERO {
            line.rate = prefill.rate;
        }
    }
}

/// Reads and deserializes a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|err| AppError::Validation(format!("{}: {err}", path.display())))
        .with_context(|| format!("failed to parse {}", path.display()))
}

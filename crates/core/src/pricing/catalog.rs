//! Tile model catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tilebook_shared::config::CatalogModelConfig;

use super::rates::RateTable;
use crate::measure::{CatalogError, SizeKey};

/// Minimum query length before suggestions are offered.
pub const SUGGESTION_MIN_QUERY: usize = 2;

/// Maximum number of suggestions returned.
pub const SUGGESTION_LIMIT: usize = 8;

/// A tile model with its catalog dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogModel {
    /// Model name.
    pub model: String,
    /// Length in the model's native unit.
    pub length: Decimal,
    /// Width in the model's native unit.
    pub width: Decimal,
    /// Size key used for packing and rate lookup.
    pub size: SizeKey,
}

/// Values used to prefill a new order line from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePrefill {
    /// Model name as catalogued.
    pub model: String,
    /// Catalog length.
    pub length: Decimal,
    /// Catalog width.
    pub width: Decimal,
    /// Catalog size key.
    pub size: SizeKey,
    /// Looked-up rate.
    pub rate: Decimal,
}

/// Searchable list of tile models.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    models: Vec<CatalogModel>,
}

impl Catalog {
    /// Creates a catalog from models.
    #[must_use]
    pub fn new(models: Vec<CatalogModel>) -> Self {
        Self { models }
    }

    /// Builds the catalog from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry has no explicit size and a zero dimension.
    pub fn from_config(entries: &[CatalogModelConfig]) -> Result<Self, CatalogError> {
        let models = entries
            .iter()
            .map(|entry| {
                let size = entry.size.as_deref().map_or_else(
                    || SizeKey::from_dimensions(entry.length, entry.width),
                    SizeKey::parse,
                );
                if size.is_empty_dimension() {
                    return Err(CatalogError::InvalidSize(entry.model.clone()));
                }
                Ok(CatalogModel {
                    model: entry.model.trim().to_string(),
                    length: entry.length,
                    width: entry.width,
                    size,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { models })
    }

    /// Returns up to 8 models whose name contains `query` (case-insensitive).
    ///
    /// Queries shorter than two characters return nothing.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&CatalogModel> {
        let query = query.trim().to_uppercase();
        if query.chars().count() < SUGGESTION_MIN_QUERY {
            return Vec::new();
        }
        self.models
            .iter()
            .filter(|m| m.model.to_uppercase().contains(&query))
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Finds a model by name (case-insensitive).
    #[must_use]
    pub fn find(&self, model: &str) -> Option<&CatalogModel> {
        let model = model.trim();
        self.models.iter().find(|m| m.model.eq_ignore_ascii_case(model))
    }

    /// Prefills a line for `model` with catalog dimensions and its rate.
    ///
    /// # Errors
    ///
    /// Returns `UnknownModel` if the model is not catalogued.
    pub fn line_for(&self, model: &str, rates: &RateTable) -> Result<LinePrefill, CatalogError> {
        let found = self
            .find(model)
            .ok_or_else(|| CatalogError::UnknownModel(model.to_string()))?;
        Ok(LinePrefill {
            model: found.model.clone(),
            length: found.length,
            width: found.width,
            size: found.size.clone(),
            rate: rates.rate_for(&found.model, &found.size),
        })
    }

    /// Number of models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

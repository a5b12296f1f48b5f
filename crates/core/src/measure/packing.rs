//! Pieces-per-box reference table.
//!
//! Lookup is two-tier: an override for the model (exact name first, then the
//! longest matching series prefix) wins over the default for the size.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tilebook_shared::config::{PackingEntryConfig, PackingOverrideConfig};

use super::error::CatalogError;
use super::size::SizeKey;

/// Built-in pieces-per-box for inch-sized tiles.
const INCH_PIECES_PER_BOX: &[(&str, u32)] = &[
    ("24X24", 4),
    ("32X32", 2),
    ("24X48", 2),
    ("40X40", 2),
    ("16X16", 9),
    ("12X12", 16),
    ("10.5X12", 19),
    ("8X12", 25),
    ("10X16", 15),
    ("8X20", 14),
    ("10X28", 8),
    ("12X24", 8),
    ("8X8", 20),
    ("12X84", 4),
    ("8X48", 6),
];

/// Which models a packing override applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ModelMatch {
    /// One model, matched by full name (case-insensitive).
    Exact(String),
    /// Every model whose name starts with the prefix (case-insensitive).
    Series(String),
}

impl ModelMatch {
    /// Creates an exact-model matcher.
    #[must_use]
    pub fn exact(model: &str) -> Self {
        Self::Exact(model.trim().to_uppercase())
    }

    /// Creates a series (name prefix) matcher.
    #[must_use]
    pub fn series(prefix: &str) -> Self {
        Self::Series(prefix.trim().to_uppercase())
    }

    /// Returns true if the matcher applies to `model`.
    #[must_use]
    pub fn matches(&self, model: &str) -> bool {
        let model = model.trim().to_uppercase();
        match self {
            Self::Exact(name) => model == *name,
            Self::Series(prefix) => !prefix.is_empty() && model.starts_with(prefix.as_str()),
        }
    }
}

impl std::fmt::Display for ModelMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(name) => write!(f, "model {name}"),
            Self::Series(prefix) => write!(f, "series {prefix}"),
        }
    }
}

/// Where a resolved packing constant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingSource {
    /// Exact model override.
    Model,
    /// Series override.
    Series,
    /// Size default.
    Default,
}

/// A resolved packing constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packing {
    /// Pieces in one box.
    pub pieces_per_box: u32,
    /// Table tier that supplied the value.
    pub source: PackingSource,
}

/// Size → pieces-per-box table with model overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackingTable {
    defaults: BTreeMap<SizeKey, u32>,
    models: BTreeMap<(SizeKey, String), u32>,
    series: BTreeMap<(SizeKey, String), u32>,
}

impl PackingTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in inch table.
    #[must_use]
    pub fn inch_default() -> Self {
        let defaults = INCH_PIECES_PER_BOX
            .iter()
            .map(|(size, pieces)| (SizeKey::parse(size), *pieces))
            .collect();
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Builds a table from configuration entries layered over `base`.
    ///
    /// Entries replace base defaults for the same size; overrides are added.
    ///
    /// # Errors
    ///
    /// Returns an error for sentinel sizes, zero packing, ambiguous or
    /// duplicate overrides.
    pub fn from_config(
        base: Self,
        entries: &[PackingEntryConfig],
        overrides: &[PackingOverrideConfig],
    ) -> Result<Self, CatalogError> {
        let mut table = base;
        for entry in entries {
            table.set_default(SizeKey::parse(&entry.size), entry.pieces_per_box)?;
        }
        for item in overrides {
            let matcher = match (&item.model, &item.series) {
                (Some(model), None) => ModelMatch::exact(model),
                (None, Some(series)) => ModelMatch::series(series),
                _ => return Err(CatalogError::AmbiguousOverride(item.size.clone())),
            };
            table.add_override(matcher, SizeKey::parse(&item.size), item.pieces_per_box)?;
        }
        Ok(table)
    }

    /// Sets (or replaces) the default for a size.
    ///
    /// # Errors
    ///
    /// Returns an error for the sentinel size or zero pieces per box.
    pub fn set_default(&mut self, size: SizeKey, pieces_per_box: u32) -> Result<(), CatalogError> {
        Self::check_entry(&size, pieces_per_box)?;
        self.defaults.insert(size, pieces_per_box);
        Ok(())
    }

    /// Adds a model or series override for one size.
    ///
    /// # Errors
    ///
    /// Returns an error if the same matcher already has an override at the
    /// size, or the entry itself is invalid.
    pub fn add_override(
        &mut self,
        matcher: ModelMatch,
        size: SizeKey,
        pieces_per_box: u32,
    ) -> Result<(), CatalogError> {
        Self::check_entry(&size, pieces_per_box)?;
        let duplicate = || CatalogError::DuplicateOverride {
            matcher: matcher.to_string(),
            size: size.to_string(),
        };
        let (target, name) = match &matcher {
            ModelMatch::Exact(name) => (&mut self.models, name.trim().to_uppercase()),
            ModelMatch::Series(prefix) if prefix.trim().is_empty() => {
                return Err(CatalogError::AmbiguousOverride(size.to_string()));
            }
            ModelMatch::Series(prefix) => (&mut self.series, prefix.trim().to_uppercase()),
        };
        let key = (size.clone(), name);
        if target.contains_key(&key) {
            return Err(duplicate());
        }
        target.insert(key, pieces_per_box);
        Ok(())
    }

    /// Resolves the packing constant for a size and optional model.
    #[must_use]
    pub fn lookup(&self, size: &SizeKey, model: Option<&str>) -> Option<Packing> {
        if let Some(model) = model.map(|m| m.trim().to_uppercase()).filter(|m| !m.is_empty()) {
            if let Some(pieces) = self.models.get(&(size.clone(), model.clone())) {
                return Some(Packing {
                    pieces_per_box: *pieces,
                    source: PackingSource::Model,
                });
            }

            let series = self
                .series
                .iter()
                .filter(|((key, prefix), _)| key == size && model.starts_with(prefix.as_str()))
                .max_by_key(|((_, prefix), _)| prefix.len());
            if let Some((_, pieces)) = series {
                return Some(Packing {
                    pieces_per_box: *pieces,
                    source: PackingSource::Series,
                });
            }
        }

        let found = self.defaults.get(size).map(|pieces| Packing {
            pieces_per_box: *pieces,
            source: PackingSource::Default,
        });
        if found.is_none() {
            tracing::debug!(size = %size, "no packing constant for size");
        }
        found
    }

    /// Shorthand for the resolved pieces-per-box.
    #[must_use]
    pub fn pieces_per_box(&self, size: &SizeKey, model: Option<&str>) -> Option<u32> {
        self.lookup(size, model).map(|p| p.pieces_per_box)
    }

    /// Number of size defaults.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    /// Returns true if the table has no size defaults.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    fn check_entry(size: &SizeKey, pieces_per_box: u32) -> Result<(), CatalogError> {
        if size.is_empty_dimension() {
            return Err(CatalogError::InvalidSize(size.to_string()));
        }
        if pieces_per_box == 0 {
            return Err(CatalogError::ZeroPacking(size.to_string()));
        }
        Ok(())
    }
}

//! Rate lookup.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::measure::{CatalogError, SizeKey};

/// Per-model special rates with per-size defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    specials: BTreeMap<String, Decimal>,
    defaults: BTreeMap<SizeKey, Decimal>,
}

impl RateTable {
    /// Creates an empty table; every lookup yields zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from configured special and default rates.
    ///
    /// # Errors
    ///
    /// Returns an error if any rate is negative.
    pub fn from_config(
        specials: &BTreeMap<String, Decimal>,
        defaults: &BTreeMap<String, Decimal>,
    ) -> Result<Self, CatalogError> {
        let mut table = Self::new();
        for (model, rate) in specials {
            table.set_special(model, *rate)?;
        }
        for (size, rate) in defaults {
            table.set_default(SizeKey::parse(size), *rate)?;
        }
        Ok(table)
    }

    /// Sets the special rate for a model.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is negative.
    pub fn set_special(&mut self, model: &str, rate: Decimal) -> Result<(), CatalogError> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(CatalogError::NegativeRate(model.to_string()));
        }
        self.specials.insert(model.trim().to_uppercase(), rate);
        Ok(())
    }

    /// Sets the default rate for a size.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate is negative.
    pub fn set_default(&mut self, size: SizeKey, rate: Decimal) -> Result<(), CatalogError> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(CatalogError::NegativeRate(size.to_string()));
        }
        self.defaults.insert(size, rate);
        Ok(())
    }

    /// Rate for a model at a size: special rate, else size default, else zero.
    #[must_use]
    pub fn rate_for(&self, model: &str, size: &SizeKey) -> Decimal {
        self.specials
            .get(&model.trim().to_uppercase())
            .or_else(|| self.defaults.get(size))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

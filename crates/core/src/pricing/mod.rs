//! Pricing.
//!
//! - Line amounts (gross, discount, net) with independent rounding
//! - Rate lookup (model specials over size defaults)
//! - Tile catalog with search and line prefill

pub mod catalog;
pub mod line;
pub mod rates;

#[cfg(test)]
mod line_props;

pub use catalog::{Catalog, CatalogModel, LinePrefill};
pub use line::{LineAmounts, LineItemCalculator};
pub use rates::RateTable;

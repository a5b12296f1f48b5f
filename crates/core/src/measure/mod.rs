//! Tile measurement.
//!
//! This module turns physical dimensions and counts into areas:
//! - Size keys derived from dimensions
//! - Pieces-per-box reference table with model and series overrides
//! - SFT conversion for inch (piece) and centimetre (box) lines

pub mod convert;
pub mod error;
pub mod packing;
pub mod size;

#[cfg(test)]
mod convert_props;

pub use convert::{Conversion, Geometry, UnitConverter, split_into_boxes};
pub use error::CatalogError;
pub use packing::{ModelMatch, Packing, PackingSource, PackingTable};
pub use size::SizeKey;

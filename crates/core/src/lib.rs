//! Order and ledger computation engine for Tilebook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every function is a total function of its explicit arguments; callers own
//! persistence and read-validate-write atomicity.
//!
//! # Modules
//!
//! - `measure` - Tile size keys, packing tables and SFT conversion
//! - `pricing` - Line amounts, rate lookup and the tile catalog
//! - `order` - Order lines, groups, totals and persisted snapshots
//! - `ledger` - Advance/due ledger balances and entry validation
//! - `words` - Amounts in words with lakh/crore grouping
//! - `ids` - Document identifier generation
//! - `shipment` - Factory sales-order shipment pipeline
//! - `reports` - Summaries and monthly groupings

pub mod ids;
pub mod ledger;
pub mod measure;
pub mod order;
pub mod pricing;
pub mod reports;
pub mod shipment;
pub mod words;

//! Dimension and piece count → SFT conversion.
//!
//! Conversions degrade instead of failing: a missing dimension or an unknown
//! packing constant yields zeroed derived values, so an incomplete line
//! contributes nothing until it is completed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tilebook_shared::types::round_money;

use super::packing::PackingTable;
use super::size::SizeKey;

/// Square inches per square foot.
const SQ_INCHES_PER_SFT: i64 = 144;

/// How a line's dimensions and quantity are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// Dimensions in inches, quantity counted in pieces.
    #[default]
    Inch,
    /// Dimensions in centimetres, quantity counted in boxes.
    Centimetre,
}

impl Geometry {
    /// Divisor turning `length * width` into square feet.
    #[must_use]
    pub fn area_divisor(self) -> Decimal {
        match self {
            Self::Inch => Decimal::from(SQ_INCHES_PER_SFT),
            // 929.03 cm² per square foot
            Self::Centimetre => Decimal::new(92_903, 2),
        }
    }

    /// Unrounded area of one piece in square feet.
    #[must_use]
    pub fn piece_area(self, length: Decimal, width: Decimal) -> Decimal {
        length * width / self.area_divisor()
    }

    /// Returns true when quantities are entered as boxes.
    #[must_use]
    pub const fn counts_boxes(self) -> bool {
        matches!(self, Self::Centimetre)
    }
}

/// Result of converting one line's dimensions and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Size key derived from the dimensions (or supplied).
    pub size_key: SizeKey,
    /// Area in square feet, rounded to 2 places.
    pub sft: Decimal,
    /// Unrounded area; amounts are priced from this value.
    #[serde(skip)]
    pub raw_sft: Decimal,
    /// Full boxes.
    pub box_count: u32,
    /// Pieces left over after filling boxes.
    pub loose_pieces: u32,
    /// Total pieces on the line.
    pub pieces: u32,
    /// Packing constant used, if one was known.
    pub pieces_per_box: Option<u32>,
}

/// Splits a piece count into full boxes and loose pieces.
///
/// Without a (positive) packing constant everything stays loose.
#[must_use]
pub fn split_into_boxes(pieces: u32, pieces_per_box: Option<u32>) -> (u32, u32) {
    match pieces_per_box.filter(|p| *p > 0) {
        Some(per_box) => {
            let boxes = pieces / per_box;
            (boxes, pieces - boxes * per_box)
        }
        None => (0, pieces),
    }
}

/// Converts tile dimensions and counts into SFT and box breakdowns.
#[derive(Debug, Clone, Copy)]
pub struct UnitConverter<'a> {
    packing: &'a PackingTable,
}

impl<'a> UnitConverter<'a> {
    /// Creates a converter over a packing table.
    #[must_use]
    pub fn new(packing: &'a PackingTable) -> Self {
        Self { packing }
    }

    /// Converts an inch line counted in pieces.
    ///
    /// `size_override_pieces` takes precedence over the table default for
    /// the derived size key.
    #[must_use]
    pub fn convert(
        &self,
        length: Decimal,
        width: Decimal,
        requested_pieces: u32,
        size_override_pieces: Option<u32>,
    ) -> Conversion {
        let size_key = SizeKey::from_dimensions(length, width);
        let pieces_per_box = size_override_pieces
            .filter(|p| *p > 0)
            .or_else(|| self.packing.pieces_per_box(&size_key, None));
        Self::convert_pieces(size_key, length, width, requested_pieces, pieces_per_box)
    }

    /// Converts an inch line, resolving model overrides from the table.
    #[must_use]
    pub fn convert_for_model(
        &self,
        length: Decimal,
        width: Decimal,
        requested_pieces: u32,
        model: Option<&str>,
    ) -> Conversion {
        let size_key = SizeKey::from_dimensions(length, width);
        let pieces_per_box = self.packing.pieces_per_box(&size_key, model);
        Self::convert_pieces(size_key, length, width, requested_pieces, pieces_per_box)
    }

    /// Converts a centimetre line counted in boxes.
    ///
    /// The size key is taken from `size` when given (catalog sizes such as
    /// `60x60`), otherwise derived from the dimensions. SFT is zero unless
    /// both dimensions, the box count and the packing constant are positive.
    #[must_use]
    pub fn convert_boxes(
        &self,
        length: Decimal,
        width: Decimal,
        boxes: u32,
        size: Option<&SizeKey>,
        model: Option<&str>,
    ) -> Conversion {
        let size_key = size
            .filter(|s| !s.is_empty_dimension())
            .cloned()
            .unwrap_or_else(|| SizeKey::from_dimensions(length, width));
        let pieces_per_box = self.packing.pieces_per_box(&size_key, model);

        let measurable = length > Decimal::ZERO && width > Decimal::ZERO && boxes > 0;
        let (raw_sft, pieces) = match pieces_per_box.filter(|p| *p > 0) {
            Some(per_box) if measurable => (
                Decimal::from(boxes)
                    * Decimal::from(per_box)
                    * Geometry::Centimetre.piece_area(length, width),
                boxes.saturating_mul(per_box),
            ),
            _ => (Decimal::ZERO, 0),
        };

        Conversion {
            size_key,
            sft: round_money(raw_sft),
            raw_sft,
            box_count: boxes,
            loose_pieces: 0,
            pieces,
            pieces_per_box,
        }
    }

    fn convert_pieces(
        size_key: SizeKey,
        length: Decimal,
        width: Decimal,
        requested_pieces: u32,
        pieces_per_box: Option<u32>,
    ) -> Conversion {
        let raw_sft = Geometry::Inch.piece_area(length, width) * Decimal::from(requested_pieces);
        let (box_count, loose_pieces) = split_into_boxes(requested_pieces, pieces_per_box);

        Conversion {
            size_key,
            sft: round_money(raw_sft),
            raw_sft,
            box_count,
            loose_pieces,
            pieces: requested_pieces,
            pieces_per_box,
        }
    }
}

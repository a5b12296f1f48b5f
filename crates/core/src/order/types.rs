//! Order domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::measure::{Conversion, Geometry, SizeKey};
use crate::pricing::{LineAmounts, LinePrefill};

/// Kind of order document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Customer invoice; inch sizes counted in pieces.
    Invoice,
    /// Warehouse tile order; centimetre sizes counted in boxes.
    Warehouse,
    /// Tile order delivered in two loads.
    TwoPoint,
    /// Tile order delivered to a site.
    Site,
}

impl OrderKind {
    /// Geometry used by lines of this kind.
    #[must_use]
    pub const fn geometry(self) -> Geometry {
        match self {
            Self::Invoice => Geometry::Inch,
            Self::Warehouse | Self::TwoPoint | Self::Site => Geometry::Centimetre,
        }
    }

    /// Line groups an order of this kind carries.
    #[must_use]
    pub const fn groups(self) -> &'static [GroupName] {
        match self {
            Self::TwoPoint => &[GroupName::FirstLoad, GroupName::SecondLoad],
            Self::Invoice | Self::Warehouse | Self::Site => &[GroupName::Main],
        }
    }

    /// Returns true for tile orders (everything but invoices).
    #[must_use]
    pub const fn is_tile_order(self) -> bool {
        !matches!(self, Self::Invoice)
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invoice => write!(f, "invoice"),
            Self::Warehouse => write!(f, "warehouse"),
            Self::TwoPoint => write!(f, "twopoint"),
            Self::Site => write!(f, "site"),
        }
    }
}

impl std::str::FromStr for OrderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "invoice" => Ok(Self::Invoice),
            "warehouse" => Ok(Self::Warehouse),
            "twopoint" | "two_point" | "two-point" => Ok(Self::TwoPoint),
            "site" => Ok(Self::Site),
            _ => Err(format!("Unknown order kind: {s}")),
        }
    }
}

/// Named group of lines within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupName {
    /// The only group of single-load orders.
    Main,
    /// First load of a two-point order.
    FirstLoad,
    /// Second load of a two-point order.
    SecondLoad,
}

impl GroupName {
    /// Label printed on documents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "Items",
            Self::FirstLoad => "1st Load",
            Self::SecondLoad => "2nd Load",
        }
    }
}

/// One order or invoice line as entered.
///
/// For invoices `quantity` counts pieces and dimensions are inches; for tile
/// orders `quantity` counts boxes and dimensions are centimetres.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderLine {
    /// Tile model name.
    pub model: String,
    /// Free-text description.
    pub description: String,
    /// Length.
    pub length: Decimal,
    /// Width.
    pub width: Decimal,
    /// Catalog size key; derived from the dimensions when absent.
    pub size: Option<SizeKey>,
    /// Pieces (invoice) or boxes (tile orders).
    pub quantity: u32,
    /// Rate per square foot.
    pub rate: Decimal,
    /// Discount percent.
    pub discount_percent: Decimal,
    /// Free-text remarks.
    pub remarks: String,
}

impl OrderLine {
    /// Creates a line from a catalog prefill.
    #[must_use]
    pub fn from_prefill(prefill: LinePrefill, quantity: u32) -> Self {
        Self {
            model: prefill.model,
            length: prefill.length,
            width: prefill.width,
            size: Some(prefill.size),
            quantity,
            rate: prefill.rate,
            ..Self::default()
        }
    }

    /// Model name, or `None` when blank.
    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        let model = self.model.trim();
        (!model.is_empty()).then_some(model)
    }
}

/// Derived values of one line. Never stored, always recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFigures {
    /// Area and packing breakdown.
    #[serde(flatten)]
    pub conversion: Conversion,
    /// Gross, discount and net amounts.
    #[serde(flatten)]
    pub amounts: LineAmounts,
}

/// A named group of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineGroup {
    /// Group name.
    pub name: GroupName,
    /// Lines in entry order.
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl LineGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: GroupName) -> Self {
        Self {
            name,
            lines: Vec::new(),
        }
    }
}

/// Free-form adjustments applied on top of the line subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    /// Amount taken off the subtotal.
    pub less: Decimal,
    /// Carrying cost added.
    pub carrying: Decimal,
    /// Unloading cost added.
    pub unloading: Decimal,
    /// VAT percent applied to the subtotal.
    pub vat_percent: Decimal,
    /// Advance already paid.
    pub advance_paid: Decimal,
}

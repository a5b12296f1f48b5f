//! Money rounding and display helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount is a `rust_decimal::Decimal`; rounding happens only where
//! the documented policy says so, through [`round_money`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places kept for money and square-feet figures.
pub const MONEY_DP: u32 = 2;

/// Rounds to [`MONEY_DP`] places, half away from zero (`2.345 → 2.35`,
/// `-2.345 → -2.35`).
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with thousands separators and two decimals
/// (`1250000` → `1,250,000.00`).
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_money(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}.{frac_part}")
    } else {
        format!("{grouped}.{frac_part}")
    }
}

/// Currency used on documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Bangladeshi Taka
    #[default]
    Bdt,
}

impl Currency {
    /// Symbol printed before amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Bdt => "৳",
        }
    }

    /// Word used when spelling amounts out.
    #[must_use]
    pub const fn unit_word(self) -> &'static str {
        match self {
            Self::Bdt => "Taka",
        }
    }

    /// Formats an amount with the currency symbol (`৳1,250.00`).
    #[must_use]
    pub fn format(self, value: Decimal) -> String {
        format!("{}{}", self.symbol(), format_amount(value))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bdt => write!(f, "BDT"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BDT" | "TK" | "TAKA" => Ok(Self::Bdt),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

//! Amounts in words for printed documents.
//!
//! Uses South Asian grouping: Hundred, Thousand, Lac (10^5) and Crore
//! (10^7). Only the integer part is spelled out.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tilebook_shared::types::Currency;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const HUNDRED: u128 = 100;
const THOUSAND: u128 = 1_000;
const LAC: u128 = 100_000;
const CRORE: u128 = 10_000_000;

/// Spells `amount` in words followed by the currency unit, e.g.
/// `"Twelve Lac Fifty Thousand Taka Only"`.
///
/// An amount whose integer part is zero is the literal `"Zero"`. Negative
/// amounts are prefixed with `"Minus "`.
#[must_use]
pub fn amount_in_words(amount: Decimal) -> String {
    amount_in_words_with(amount, Currency::default())
}

/// Like [`amount_in_words`] with an explicit currency unit.
#[must_use]
pub fn amount_in_words_with(amount: Decimal, currency: Currency) -> String {
    let whole = amount.trunc().abs().to_u128().unwrap_or_default();
    if whole == 0 {
        return "Zero".to_string();
    }

    let words = format!("{} {} Only", spell(whole), currency.unit_word());
    if amount.is_sign_negative() {
        format!("Minus {words}")
    } else {
        words
    }
}

/// Spells a positive integer without the currency suffix.
#[must_use]
pub fn spell(n: u128) -> String {
    if n < 20 {
        // Bounded by the branch.
        return ONES[usize::try_from(n).unwrap_or_default()].to_string();
    }
    if n < HUNDRED {
        let tens = TENS[usize::try_from(n / 10).unwrap_or_default()];
        return join(tens, n % 10);
    }
    if n < THOUSAND {
        let head = format!("{} Hundred", spell(n / HUNDRED));
        let rest = n % HUNDRED;
        return if rest == 0 {
            head
        } else {
            format!("{head} and {}", spell(rest))
        };
    }
    if n < LAC {
        return unit(n, THOUSAND, "Thousand");
    }
    if n < CRORE {
        return unit(n, LAC, "Lac");
    }
    unit(n, CRORE, "Crore")
}

fn unit(n: u128, size: u128, name: &str) -> String {
    let head = format!("{} {name}", spell(n / size));
    join(&head, n % size)
}

fn join(head: &str, rest: u128) -> String {
    if rest == 0 {
        head.to_string()
    } else {
        format!("{head} {}", spell(rest))
    }
}

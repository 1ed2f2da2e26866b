//! Formatting helpers for card text.

use rust_decimal::Decimal;
use sole_and_ankle_core::{CurrencyCode, Price};

/// Format an amount as currency text, e.g. `"$150.00"`.
///
/// The output parses back to the same amount with
/// [`Price::parse`](sole_and_ankle_core::Price::parse) for any amount with at
/// most two decimal places.
#[must_use]
pub fn format_price(amount: Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).to_string()
}

/// Prefix a word with a count, adding an `s` unless the count is exactly one.
///
/// ```
/// use sole_and_ankle_storefront::format::pluralize;
///
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 3), "3 Colors");
/// ```
#[must_use]
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored in the currency's major unit (dollars, not cents) and
//! displayed with two decimal places behind a currency symbol:
//!
//! ```
//! use rust_decimal::Decimal;
//! use sole_and_ankle_core::{CurrencyCode, Price};
//!
//! let price = Price::new(Decimal::new(15_000, 2), CurrencyCode::USD);
//! assert_eq!(price.to_string(), "$150.00");
//!
//! let parsed = Price::parse("$150.00", CurrencyCode::USD).unwrap();
//! assert_eq!(parsed, price);
//! ```

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places shown for every currency we support.
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur when parsing a [`Price`] from display text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty (after trimming and removing the symbol).
    #[error("price cannot be empty")]
    Empty,
    /// The remaining text is not a plain decimal number.
    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, DISPLAY_DECIMAL_PLACES), currency_code)
    }

    /// Parse display text such as `"$150.00"` back into a price.
    ///
    /// The currency symbol is optional and a leading `-` is accepted, so
    /// anything produced by the `Display` impl parses back to the same amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Empty`] when nothing but whitespace or the symbol
    /// is given, and [`PriceError::InvalidAmount`] when the remainder contains
    /// anything other than digits and a decimal point.
    pub fn parse(text: &str, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        let trimmed = text.trim();
        let (negative, unsigned) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));
        let digits = unsigned
            .strip_prefix(currency_code.symbol())
            .unwrap_or(unsigned);

        if digits.is_empty() {
            return Err(PriceError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(PriceError::InvalidAmount(trimmed.to_string()));
        }

        let amount = Decimal::from_str(digits)
            .map_err(|_| PriceError::InvalidAmount(trimmed.to_string()))?;
        let amount = if negative { -amount } else { amount };

        Ok(Self::new(amount, currency_code))
    }

    /// The amount rounded to display precision (half away from zero).
    #[must_use]
    pub fn rounded_amount(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded_amount();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(
            f,
            "{sign}{}{:.2}",
            self.currency_code.symbol(),
            rounded.abs()
        )
    }
}

/// Error returned when a currency code is not one we support.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyCodeError(pub String);

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Symbol printed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(CurrencyCodeError(s.to_string())),
        }
    }
}

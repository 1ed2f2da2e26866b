//! Shoe listing value object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::slug::ShoeSlug;
use super::variant::Variant;

/// Errors returned by [`ShoeListing::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The regular price is below zero.
    #[error("price cannot be negative: {0}")]
    NegativePrice(Decimal),
    /// The sale price is below zero.
    #[error("sale price cannot be negative: {0}")]
    NegativeSalePrice(Decimal),
}

/// A single shoe as handed to the card renderer.
///
/// Field names serialize in camelCase to match the listing feed:
///
/// ```
/// use sole_and_ankle_core::ShoeListing;
///
/// let listing: ShoeListing = serde_json::from_str(r#"{
///     "slug": "tech-challenge-777",
///     "name": "Tech Challenge 777",
///     "imageSrc": "/assets/tech-challenge-777.jpg",
///     "price": 110,
///     "releaseDate": "2024-01-01T00:00:00Z",
///     "numOfColors": 2
/// }"#).unwrap();
///
/// assert!(listing.sale_price.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    /// Identifier used for the detail-page link.
    pub slug: ShoeSlug,
    /// Display name.
    pub name: String,
    /// Image URL or path.
    pub image_src: String,
    /// Regular price in the currency's major unit.
    pub price: Decimal,
    /// Discounted price. Expected to be below `price`; not enforced.
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    /// When the shoe was (or will be) released.
    pub release_date: DateTime<Utc>,
    /// Number of available colorways.
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Resolve the card variant relative to `now`.
    #[must_use]
    pub fn variant_at(&self, now: DateTime<Utc>) -> Variant {
        Variant::resolve_at(self.sale_price, self.release_date, now)
    }

    /// Resolve the card variant against the current time.
    #[must_use]
    pub fn variant(&self) -> Variant {
        Variant::resolve(self.sale_price, self.release_date)
    }

    /// Whether the sale price is present but not below the regular price.
    #[must_use]
    pub fn has_unusual_discount(&self) -> bool {
        self.sale_price.is_some_and(|sale| sale >= self.price)
    }

    /// Check the non-negative price constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError`] when `price` or `sale_price` is negative.
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(ListingError::NegativePrice(self.price));
        }
        match self.sale_price {
            Some(sale) if sale.is_sign_negative() && !sale.is_zero() => {
                Err(ListingError::NegativeSalePrice(sale))
            }
            _ => Ok(()),
        }
    }
}

//! Integration tests for Sole & Ankle.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sole-and-ankle-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shoe_card_scenarios` - End-to-end rendering of listing JSON to card HTML
//! - `variant_rules` - Variant resolution across the release window
//!
//! Shared fixtures live in this library so every test file builds listings
//! the same way.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use sole_and_ankle_core::ShoeListing;

/// Fixed reference time used by scenarios that need a "now".
///
/// # Panics
///
/// Never; the date is a valid constant.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A date `days` days before [`reference_now`].
#[must_use]
pub fn days_before_now(days: i64) -> DateTime<Utc> {
    reference_now() - TimeDelta::days(days)
}

/// Build a listing from feed JSON.
///
/// `sale_price` is written as JSON `null` when absent, matching feeds that
/// always send the key.
///
/// # Panics
///
/// Panics if the generated JSON does not deserialize, which indicates a
/// broken fixture.
#[must_use]
pub fn listing_json(
    slug: &str,
    price: u32,
    sale_price: Option<u32>,
    release_date: DateTime<Utc>,
    num_of_colors: u32,
) -> ShoeListing {
    let json = serde_json::json!({
        "slug": slug,
        "name": "Fixture Shoe",
        "imageSrc": format!("/assets/{slug}.jpg"),
        "price": price,
        "salePrice": sale_price,
        "releaseDate": release_date.to_rfc3339(),
        "numOfColors": num_of_colors,
    });
    serde_json::from_value(json).expect("fixture listing should deserialize")
}

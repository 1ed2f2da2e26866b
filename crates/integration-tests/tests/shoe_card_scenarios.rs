//! Integration tests for rendering shoe cards from listing feed JSON.
//!
//! These tests verify the full path from a deserialized listing through
//! variant resolution to the rendered HTML fragment.

use sole_and_ankle_core::{CurrencyCode, Price, Variant};
use sole_and_ankle_integration_tests::{days_before_now, listing_json, reference_now};
use sole_and_ankle_storefront::{CardConfig, ShoeCardRenderer};

use chrono::{TimeZone, Utc};

// =============================================================================
// Spec Scenarios
// =============================================================================

#[test]
fn test_old_release_on_sale_shows_both_prices() {
    let release = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let listing = listing_json("tech-challenge-777", 150, Some(110), release, 2);

    assert_eq!(listing.variant_at(reference_now()), Variant::OnSale);

    let html = ShoeCardRenderer::default()
        .render_at(&listing, reference_now())
        .expect("render should succeed");

    assert!(html.contains(r#"<del class="shoe-card__price shoe-card__price--old">$150.00</del>"#));
    assert!(html.contains(r#"<span class="shoe-card__price shoe-card__price--sale">$110.00</span>"#));
    assert!(html.contains(">Sale</div>"));
}

#[test]
fn test_recent_release_shows_just_released_badge() {
    let listing = listing_json("pegasus-40", 120, None, days_before_now(29), 1);

    assert_eq!(listing.variant_at(reference_now()), Variant::NewRelease);

    let html = ShoeCardRenderer::default()
        .render_at(&listing, reference_now())
        .expect("render should succeed");

    let badge = Variant::NewRelease.badge_label().expect("new releases have a badge");
    assert_eq!(badge, "Just Released!");
    assert!(html.contains(badge));
    assert!(html.contains(r#"<span class="shoe-card__price">$120.00</span>"#));
    assert!(html.contains("1 Color<"));
}

#[test]
fn test_year_old_release_renders_without_badge() {
    let listing = listing_json("classic-runner", 90, None, days_before_now(400), 0);

    assert_eq!(listing.variant_at(reference_now()), Variant::Default);

    let html = ShoeCardRenderer::default()
        .render_at(&listing, reference_now())
        .expect("render should succeed");

    assert!(!html.contains("shoe-card__badge"));
    assert!(!html.contains("Sale"));
    assert!(!html.contains("Just Released!"));
    assert!(html.contains("0 Colors"));
}

// =============================================================================
// Output Contract Tests
// =============================================================================

#[test]
fn test_card_links_to_detail_page() {
    let listing = listing_json("leather-boot", 200, None, days_before_now(100), 4);

    let html = ShoeCardRenderer::default()
        .render_at(&listing, reference_now())
        .expect("render should succeed");

    assert!(html.contains(r#"href="/shoe/leather-boot""#));
    assert!(html.contains(r#"src="/assets/leather-boot.jpg""#));
    assert!(html.trim_end().ends_with("</a>"));
}

#[test]
fn test_rendered_prices_parse_back_to_listing_amounts() {
    let listing = listing_json("react-infinity", 160, Some(139), days_before_now(5), 3);
    let view = ShoeCardRenderer::default().view_at(&listing, reference_now());

    let price = Price::parse(&view.price, CurrencyCode::USD).expect("price text parses");
    assert_eq!(price.amount, listing.price);

    let sale_text = view.sale_price.expect("on-sale cards carry a sale price");
    let sale = Price::parse(&sale_text, CurrencyCode::USD).expect("sale text parses");
    assert_eq!(Some(sale.amount), listing.sale_price);
}

#[test]
fn test_config_drives_currency_and_theme() {
    let config = CardConfig::from_vars(|key| match key {
        "SHOE_CARD_CURRENCY" => Some("GBP".to_string()),
        "SHOE_CARD_COLOR_SECONDARY" => Some("#5b5bd6".to_string()),
        _ => None,
    })
    .expect("config should load");
    let renderer = ShoeCardRenderer::from(config);

    let listing = listing_json("terra-kiger", 130, None, days_before_now(1), 2);
    let html = renderer
        .render_at(&listing, reference_now())
        .expect("render should succeed");

    assert!(html.contains("£130.00"));
    assert!(html.contains("--shoe-card-secondary: #5b5bd6;"));
}

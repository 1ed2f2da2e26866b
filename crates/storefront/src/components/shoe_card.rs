//! Shoe card component.
//!
//! A card links to the shoe's detail page and shows its image, name, price,
//! and number of colors. The [`Variant`] decides which badge is overlaid on
//! the image and whether the price is shown struck through next to a sale
//! price.

use askama::Template;
use chrono::{DateTime, Utc};
use sole_and_ankle_core::{CurrencyCode, ShoeListing, Variant};

use crate::config::CardConfig;
use crate::error::Result;
use crate::format::{format_price, pluralize};
use crate::theme::Theme;

/// Shoe card display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeCardView {
    /// Detail page link (`/shoe/{slug}`).
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: Variant,
    /// Regular price, struck through when on sale.
    pub price: String,
    /// Present exactly when the variant is [`Variant::OnSale`].
    pub sale_price: Option<String>,
    /// e.g. "3 Colors".
    pub color_info: String,
}

/// Shoe card fragment template.
#[derive(Template)]
#[template(path = "components/shoe_card.html")]
pub struct ShoeCardTemplate<'a> {
    pub card: &'a ShoeCardView,
    pub theme: &'a Theme,
}

/// Renders shoe listings to HTML with a fixed theme and currency.
#[derive(Debug, Clone, Default)]
pub struct ShoeCardRenderer {
    theme: Theme,
    currency: CurrencyCode,
}

impl ShoeCardRenderer {
    /// Create a renderer.
    #[must_use]
    pub const fn new(theme: Theme, currency: CurrencyCode) -> Self {
        Self { theme, currency }
    }

    /// The theme injected into every card.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The currency used for price text.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Build the display model for a listing relative to `now`.
    #[must_use]
    pub fn view_at(&self, listing: &ShoeListing, now: DateTime<Utc>) -> ShoeCardView {
        let variant = listing.variant_at(now);
        let sale_price = match variant {
            Variant::OnSale => listing
                .sale_price
                .map(|amount| format_price(amount, self.currency)),
            Variant::NewRelease | Variant::Default => None,
        };

        ShoeCardView {
            href: listing.slug.detail_path(),
            name: listing.name.clone(),
            image_src: listing.image_src.clone(),
            variant,
            price: format_price(listing.price, self.currency),
            sale_price,
            color_info: pluralize("Color", listing.num_of_colors),
        }
    }

    /// Render a listing relative to `now`.
    ///
    /// # Errors
    ///
    /// Returns `CardError::Listing` if the listing has a negative price and
    /// `CardError::Template` if rendering fails.
    pub fn render_at(&self, listing: &ShoeListing, now: DateTime<Utc>) -> Result<String> {
        listing.validate()?;

        if listing.has_unusual_discount() {
            tracing::warn!(
                slug = %listing.slug,
                price = %listing.price,
                sale_price = ?listing.sale_price,
                "Sale price is not below the regular price"
            );
        }

        let card = self.view_at(listing, now);
        let html = ShoeCardTemplate {
            card: &card,
            theme: &self.theme,
        }
        .render()?;

        tracing::debug!(
            slug = %listing.slug,
            variant = %card.variant,
            badge = ?card.variant.badge_label(),
            "Rendered shoe card"
        );

        Ok(html)
    }

    /// Render a listing against the current time.
    ///
    /// # Errors
    ///
    /// See [`ShoeCardRenderer::render_at`].
    pub fn render(&self, listing: &ShoeListing) -> Result<String> {
        self.render_at(listing, Utc::now())
    }
}

impl From<CardConfig> for ShoeCardRenderer {
    fn from(config: CardConfig) -> Self {
        Self::new(config.theme, config.currency)
    }
}

//! Sole & Ankle Core - Shared shoe listing types.
//!
//! This crate provides the types behind a shoe card:
//! - [`ShoeListing`] - The listing value a caller hands to the renderer
//! - [`Variant`] - Which display mode a card uses (sale, new release, default)
//! - [`Price`] - Decimal amounts with currency formatting
//! - [`ShoeSlug`] - Validated identifier used in detail-page links
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! templating, no clock access outside [`Variant::resolve`]. Rendering lives
//! in the `storefront` crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

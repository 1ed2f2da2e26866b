//! Core types for Sole & Ankle.
//!
//! This module provides type-safe wrappers for shoe listing concepts.

pub mod listing;
pub mod price;
pub mod slug;
pub mod variant;

pub use listing::{ListingError, ShoeListing};
pub use price::{CurrencyCode, CurrencyCodeError, Price, PriceError};
pub use slug::{ShoeSlug, SlugError};
pub use variant::{NEW_RELEASE_WINDOW_DAYS, Variant, is_new_release};

//! Sole & Ankle Storefront - Shoe card rendering.
//!
//! This crate turns a [`ShoeListing`](sole_and_ankle_core::ShoeListing) into
//! an HTML fragment using Askama templates.
//!
//! # Modules
//!
//! - [`components`] - The shoe card view model, template, and renderer
//! - [`config`] - Renderer configuration loaded from environment variables
//! - [`format`] - Price and count formatting helpers
//! - [`theme`] - Palette and font weights injected into the card markup
//! - [`error`] - Unified error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod theme;

pub use components::shoe_card::{ShoeCardRenderer, ShoeCardTemplate, ShoeCardView};
pub use config::{CardConfig, ConfigError};
pub use error::{CardError, Result};
pub use theme::{Palette, Theme, Weights};

//! Card renderer configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOE_CARD_CURRENCY` - ISO 4217 code used for prices (default: USD)
//! - `SHOE_CARD_COLOR_PRIMARY` - Sale badge and sale price color
//! - `SHOE_CARD_COLOR_SECONDARY` - New-release badge color

use std::str::FromStr;

use sole_and_ankle_core::CurrencyCode;
use thiserror::Error;

use crate::theme::Theme;

const CURRENCY_VAR: &str = "SHOE_CARD_CURRENCY";
const COLOR_PRIMARY_VAR: &str = "SHOE_CARD_COLOR_PRIMARY";
const COLOR_SECONDARY_VAR: &str = "SHOE_CARD_COLOR_SECONDARY";

/// Characters that would let a color value escape its CSS declaration.
const FORBIDDEN_COLOR_CHARS: &[char] = &[';', '{', '}', '<', '>'];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Shoe card renderer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardConfig {
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Palette and weights for the card markup
    pub theme: Theme,
}

impl CardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let currency = match lookup(CURRENCY_VAR) {
            Some(value) => CurrencyCode::from_str(&value)
                .map_err(|e| ConfigError::InvalidEnvVar(CURRENCY_VAR.to_string(), e.to_string()))?,
            None => CurrencyCode::default(),
        };

        let mut theme = Theme::default();
        if let Some(color) = lookup(COLOR_PRIMARY_VAR) {
            theme.colors.primary = validate_color(COLOR_PRIMARY_VAR, &color)?;
        }
        if let Some(color) = lookup(COLOR_SECONDARY_VAR) {
            theme.colors.secondary = validate_color(COLOR_SECONDARY_VAR, &color)?;
        }

        tracing::info!(currency = %currency, "Shoe card configuration loaded");

        Ok(Self { currency, theme })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Validate a CSS color value before it is placed in a style attribute.
fn validate_color(key: &str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "color cannot be empty".to_string(),
        ));
    }
    if let Some(c) = trimmed.chars().find(|c| FORBIDDEN_COLOR_CHARS.contains(c)) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("color contains forbidden character {c:?}"),
        ));
    }
    Ok(trimmed.to_string())
}

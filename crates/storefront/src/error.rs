//! Unified error handling for card rendering.
//!
//! Provides a unified `CardError` type. Every fallible public function in
//! this crate returns `Result<T, CardError>`.

use sole_and_ankle_core::ListingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Crate-level error type for the storefront.
#[derive(Debug, Error)]
pub enum CardError {
    /// The listing failed validation.
    #[error("Invalid listing: {0}")]
    Listing(#[from] ListingError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result type alias for `CardError`.
pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_card_error_display() {
        let err = CardError::from(ListingError::NegativePrice(Decimal::from(-3)));
        assert_eq!(err.to_string(), "Invalid listing: price cannot be negative: -3");

        let err = CardError::from(ConfigError::InvalidEnvVar(
            "SHOE_CARD_CURRENCY".to_string(),
            "unsupported currency code: XYZ".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid environment variable SHOE_CARD_CURRENCY: \
             unsupported currency code: XYZ"
        );
    }
}

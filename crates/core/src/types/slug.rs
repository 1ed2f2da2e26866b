//! Shoe slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShoeSlug`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character that is not URL-safe.
    #[error("slug contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// The unique, URL-safe identifier of a shoe listing.
///
/// Slugs appear verbatim in detail-page links (`/shoe/{slug}`), so only
/// characters that need no percent-encoding are accepted.
///
/// ## Constraints
///
/// - Length: 1-128 characters
/// - ASCII letters, digits, `-` and `_` only
///
/// ## Examples
///
/// ```
/// use sole_and_ankle_core::ShoeSlug;
///
/// let slug = ShoeSlug::parse("nike-air-max-270").unwrap();
/// assert_eq!(slug.detail_path(), "/shoe/nike-air-max-270");
///
/// assert!(ShoeSlug::parse("").is_err());
/// assert!(ShoeSlug::parse("has space").is_err());
/// assert!(ShoeSlug::parse("../admin").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ShoeSlug(String);

impl ShoeSlug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 128;

    /// Path prefix for shoe detail pages.
    pub const DETAIL_PATH_PREFIX: &'static str = "/shoe/";

    /// Parse a `ShoeSlug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 128 characters, or
    /// contains anything other than ASCII alphanumerics, `-` and `_`.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(invalid) = s
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(SlugError::InvalidCharacter(invalid));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link to the listing's detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("{}{}", Self::DETAIL_PATH_PREFIX, self.0)
    }
}

impl fmt::Display for ShoeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShoeSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ShoeSlug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShoeSlug> for String {
    fn from(slug: ShoeSlug) -> Self {
        slug.0
    }
}

impl core::str::FromStr for ShoeSlug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_slugs() {
        assert!(ShoeSlug::parse("tech-challenge-777").is_ok());
        assert!(ShoeSlug::parse("REACT_infinity_pro").is_ok());
        assert!(ShoeSlug::parse("a").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ShoeSlug::parse(""), Err(SlugError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(ShoeSlug::MAX_LENGTH + 1);
        assert_eq!(
            ShoeSlug::parse(&long),
            Err(SlugError::TooLong {
                max: ShoeSlug::MAX_LENGTH
            })
        );
        assert!(ShoeSlug::parse(&"a".repeat(ShoeSlug::MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_parse_invalid_characters() {
        assert_eq!(
            ShoeSlug::parse("air max"),
            Err(SlugError::InvalidCharacter(' '))
        );
        assert_eq!(
            ShoeSlug::parse("shoe/../x"),
            Err(SlugError::InvalidCharacter('/'))
        );
        assert_eq!(
            ShoeSlug::parse("\"onmouseover"),
            Err(SlugError::InvalidCharacter('"'))
        );
        assert_eq!(
            ShoeSlug::parse("café"),
            Err(SlugError::InvalidCharacter('é'))
        );
    }

    #[test]
    fn test_detail_path() {
        let slug = ShoeSlug::parse("pegasus").unwrap();
        assert_eq!(slug.detail_path(), "/shoe/pegasus");
        assert_eq!(slug.to_string(), "pegasus");
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let slug: ShoeSlug = serde_json::from_str("\"leather-boot\"").unwrap();
        assert_eq!(slug.as_str(), "leather-boot");
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"leather-boot\"");

        assert!(serde_json::from_str::<ShoeSlug>("\"bad slug\"").is_err());
    }
}

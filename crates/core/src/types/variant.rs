//! Display variants for shoe cards.
//!
//! A card shows exactly one variant. Sale messaging always wins over novelty
//! messaging: a shoe that is both discounted and recently released renders as
//! [`Variant::OnSale`].

use core::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Age (in days) up to which a release still counts as new.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The display mode of a shoe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// A sale price is present.
    OnSale,
    /// Released within the last [`NEW_RELEASE_WINDOW_DAYS`] days (or not yet released).
    NewRelease,
    /// Neither on sale nor new.
    Default,
}

impl Variant {
    /// Resolve the variant against the current time.
    #[must_use]
    pub fn resolve(sale_price: Option<Decimal>, release_date: DateTime<Utc>) -> Self {
        Self::resolve_at(sale_price, release_date, Utc::now())
    }

    /// Resolve the variant relative to `now`.
    ///
    /// First match wins: any sale price gives [`Variant::OnSale`], then a
    /// release inside the new-release window gives [`Variant::NewRelease`],
    /// otherwise [`Variant::Default`].
    ///
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use rust_decimal::Decimal;
    /// use sole_and_ankle_core::Variant;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let last_week = now - TimeDelta::days(7);
    ///
    /// assert_eq!(Variant::resolve_at(Some(Decimal::from(110)), last_week, now), Variant::OnSale);
    /// assert_eq!(Variant::resolve_at(None, last_week, now), Variant::NewRelease);
    /// ```
    #[must_use]
    pub fn resolve_at(
        sale_price: Option<Decimal>,
        release_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        if sale_price.is_some() {
            Self::OnSale
        } else if is_new_release(release_date, now) {
            Self::NewRelease
        } else {
            Self::Default
        }
    }

    /// Text of the badge overlaid on the card image, if any.
    #[must_use]
    pub const fn badge_label(self) -> Option<&'static str> {
        match self {
            Self::OnSale => Some("Sale"),
            Self::NewRelease => Some("Just Released!"),
            Self::Default => None,
        }
    }

    /// The kebab-case name (`"on-sale"`, `"new-release"`, `"default"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnSale => "on-sale",
            Self::NewRelease => "new-release",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a release falls inside the new-release window ending at `now`.
///
/// The window is inclusive: a release exactly 30 days old is still new.
/// Releases dated after `now` count as new as well.
#[must_use]
pub fn is_new_release(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date) <= TimeDelta::days(NEW_RELEASE_WINDOW_DAYS)
}

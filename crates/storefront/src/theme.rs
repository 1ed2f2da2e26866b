//! Card theme: color palette and font weights.
//!
//! The theme is a plain value handed to the renderer. It reaches the markup
//! as CSS custom properties on the card's root element, which
//! `static/css/shoe_card.css` consumes.

use std::fmt::Write;

/// Colors used by the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Badge text.
    pub white: String,
    /// Sale badge background and sale price.
    pub primary: String,
    /// New-release badge background.
    pub secondary: String,
    /// Struck-through original price.
    pub gray_300: String,
    /// Color count line.
    pub gray_700: String,
    /// Shoe name.
    pub gray_900: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            white: "hsl(0deg 0% 100%)".to_string(),
            primary: "hsl(340deg 65% 47%)".to_string(),
            secondary: "hsl(240deg 60% 63%)".to_string(),
            gray_300: "hsl(190deg 5% 80%)".to_string(),
            gray_700: "hsl(220deg 5% 40%)".to_string(),
            gray_900: "hsl(220deg 3% 20%)".to_string(),
        }
    }
}

/// Font weights used by the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            normal: 500,
            medium: 600,
            bold: 800,
        }
    }
}

/// Styling constants for a shoe card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
    pub weights: Weights,
}

impl Theme {
    /// Prefix for every custom property the theme emits.
    pub const VARIABLE_PREFIX: &'static str = "--shoe-card-";

    /// Render the theme as inline CSS custom property declarations.
    ///
    /// ```
    /// use sole_and_ankle_storefront::Theme;
    ///
    /// let css = Theme::default().css_variables();
    /// assert!(css.starts_with("--shoe-card-white: hsl(0deg 0% 100%);"));
    /// ```
    #[must_use]
    pub fn css_variables(&self) -> String {
        let colors = &self.colors;
        let declarations: [(&str, &dyn std::fmt::Display); 9] = [
            ("white", &colors.white),
            ("primary", &colors.primary),
            ("secondary", &colors.secondary),
            ("gray-300", &colors.gray_300),
            ("gray-700", &colors.gray_700),
            ("gray-900", &colors.gray_900),
            ("weight-normal", &self.weights.normal),
            ("weight-medium", &self.weights.medium),
            ("weight-bold", &self.weights.bold),
        ];

        let mut css = String::new();
        for (name, value) in declarations {
            if !css.is_empty() {
                css.push(' ');
            }
            // Writing to a String cannot fail
            let _ = write!(css, "{}{name}: {value};", Self::VARIABLE_PREFIX);
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables_cover_palette_and_weights() {
        let css = Theme::default().css_variables();

        assert!(css.contains("--shoe-card-primary: hsl(340deg 65% 47%);"));
        assert!(css.contains("--shoe-card-secondary: hsl(240deg 60% 63%);"));
        assert!(css.contains("--shoe-card-gray-300: hsl(190deg 5% 80%);"));
        assert!(css.contains("--shoe-card-weight-normal: 500;"));
        assert!(css.contains("--shoe-card-weight-medium: 600;"));
        assert!(css.ends_with("--shoe-card-weight-bold: 800;"));
    }

    #[test]
    fn test_css_variables_reflect_overrides() {
        let mut theme = Theme::default();
        theme.colors.primary = "#ff0066".to_string();

        assert!(theme.css_variables().contains("--shoe-card-primary: #ff0066;"));
    }
}

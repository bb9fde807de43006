//! Text attributes
//!
//! The styling applied to characters as they are written. Attributes are a
//! small `Copy` value: every SGR code produces a new value via
//! [`TextAttributes::with`] rather than mutating one in place.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Text styling: eight style flags plus foreground/background colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextAttributes {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub inverse: bool,
    pub hidden: bool,
    pub strikethrough: bool,
    pub foreground: Color,
    pub background: Color,
}

/// Per-field overrides for [`TextAttributes::with`]
///
/// `None` keeps the existing value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeOverrides {
    pub bold: Option<bool>,
    pub dim: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub blink: Option<bool>,
    pub inverse: Option<bool>,
    pub hidden: Option<bool>,
    pub strikethrough: Option<bool>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl TextAttributes {
    /// Return a copy with the given fields replaced
    #[must_use]
    pub fn with(self, overrides: AttributeOverrides) -> Self {
        Self {
            bold: overrides.bold.unwrap_or(self.bold),
            dim: overrides.dim.unwrap_or(self.dim),
            italic: overrides.italic.unwrap_or(self.italic),
            underline: overrides.underline.unwrap_or(self.underline),
            blink: overrides.blink.unwrap_or(self.blink),
            inverse: overrides.inverse.unwrap_or(self.inverse),
            hidden: overrides.hidden.unwrap_or(self.hidden),
            strikethrough: overrides.strikethrough.unwrap_or(self.strikethrough),
            foreground: overrides.foreground.unwrap_or(self.foreground),
            background: overrides.background.unwrap_or(self.background),
        }
    }

    /// Copy with a new foreground color
    #[must_use]
    pub fn with_foreground(self, color: Color) -> Self {
        self.with(AttributeOverrides {
            foreground: Some(color),
            ..AttributeOverrides::default()
        })
    }

    /// Copy with a new background color
    #[must_use]
    pub fn with_background(self, color: Color) -> Self {
        self.with(AttributeOverrides {
            background: Some(color),
            ..AttributeOverrides::default()
        })
    }

    /// Check whether every flag and color is at its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_keeps_unset_fields() {
        let attrs = TextAttributes {
            bold: true,
            foreground: Color::RED,
            ..TextAttributes::default()
        };

        let next = attrs.with(AttributeOverrides {
            italic: Some(true),
            ..AttributeOverrides::default()
        });

        assert!(next.bold);
        assert!(next.italic);
        assert_eq!(next.foreground, Color::RED);
        // Original value is untouched
        assert!(!attrs.italic);
    }

    #[test]
    fn test_with_can_clear() {
        let attrs = TextAttributes {
            underline: true,
            ..TextAttributes::default()
        };
        let next = attrs.with(AttributeOverrides {
            underline: Some(false),
            ..AttributeOverrides::default()
        });
        assert!(next.is_default());
    }

    #[test]
    fn test_color_helpers() {
        let attrs = TextAttributes::default()
            .with_foreground(Color::GREEN)
            .with_background(Color::Rgb(1, 2, 3));
        assert_eq!(attrs.foreground, Color::GREEN);
        assert_eq!(attrs.background, Color::Rgb(1, 2, 3));
        assert!(!attrs.is_default());
    }
}

//! Terminal color representation
//!
//! Supports:
//! - The terminal's default foreground/background
//! - 256-color palette indices (0-15 standard/bright ANSI, 16-255 extended)
//! - 24-bit true color (RGB)
//!
//! The decoder only ever produces palette indices; resolving an index to a
//! concrete pixel color is left to the renderer.

use serde::{Deserialize, Serialize};

/// A terminal color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Default terminal color (foreground or background)
    #[default]
    Default,
    /// Palette index (0-15 ANSI, 16-231 color cube, 232-255 grayscale)
    Palette(u8),
    /// 24-bit RGB color
    Rgb(u8, u8, u8),
}

impl Color {
    /// Standard ANSI colors (0-7)
    pub const BLACK: Color = Color::Palette(0);
    pub const RED: Color = Color::Palette(1);
    pub const GREEN: Color = Color::Palette(2);
    pub const YELLOW: Color = Color::Palette(3);
    pub const BLUE: Color = Color::Palette(4);
    pub const MAGENTA: Color = Color::Palette(5);
    pub const CYAN: Color = Color::Palette(6);
    pub const WHITE: Color = Color::Palette(7);

    /// Bright ANSI colors (8-15)
    pub const BRIGHT_BLACK: Color = Color::Palette(8);
    pub const BRIGHT_RED: Color = Color::Palette(9);
    pub const BRIGHT_GREEN: Color = Color::Palette(10);
    pub const BRIGHT_YELLOW: Color = Color::Palette(11);
    pub const BRIGHT_BLUE: Color = Color::Palette(12);
    pub const BRIGHT_MAGENTA: Color = Color::Palette(13);
    pub const BRIGHT_CYAN: Color = Color::Palette(14);
    pub const BRIGHT_WHITE: Color = Color::Palette(15);

    /// Build a 4-bit color from an SGR offset (0-7), optionally bright.
    ///
    /// `30-37`/`40-47` map to 0-7, `90-97`/`100-107` to 8-15.
    pub fn ansi(offset: u16, bright: bool) -> Self {
        let base = (offset & 0x07) as u8;
        Color::Palette(if bright { base + 8 } else { base })
    }

    /// Build a palette color from an unbounded parameter, clamped to 0-255
    pub fn palette_clamped(index: u16) -> Self {
        Color::Palette(clamp_channel(index))
    }

    /// Build an RGB color from unbounded parameters, each clamped to 0-255
    pub fn rgb_clamped(r: u16, g: u16, b: u16) -> Self {
        Color::Rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

fn clamp_channel(value: u16) -> u8 {
    value.min(u16::from(u8::MAX)) as u8
}

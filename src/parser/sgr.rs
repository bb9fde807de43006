//! SGR (Select Graphic Rendition) dispatch
//!
//! Folds a full `CSI ... m` parameter list over the current attributes and
//! returns the single resulting value. Extended colors (38/48) consume the
//! following parameters positionally:
//!
//! - `38;5;n`     palette index `n`
//! - `38;2;r;g;b` 24-bit color
//!
//! When too few parameters follow for the declared sub-mode the 38/48 code
//! does nothing and the remaining parameters are read as ordinary codes.

use crate::core::{AttributeOverrides, Color, TextAttributes};

/// Apply an SGR parameter list to `current`
pub fn apply_sgr(current: TextAttributes, params: &[u16]) -> TextAttributes {
    if params.is_empty() {
        return TextAttributes::default();
    }

    let mut attrs = current;
    let mut i = 0;
    while i < params.len() {
        let code = params[i];
        attrs = match code {
            0 => TextAttributes::default(),
            1 => set(attrs, |o| o.bold = Some(true)),
            2 => set(attrs, |o| o.dim = Some(true)),
            3 => set(attrs, |o| o.italic = Some(true)),
            4 | 21 => set(attrs, |o| o.underline = Some(true)),
            5 | 6 => set(attrs, |o| o.blink = Some(true)),
            7 => set(attrs, |o| o.inverse = Some(true)),
            8 => set(attrs, |o| o.hidden = Some(true)),
            9 => set(attrs, |o| o.strikethrough = Some(true)),
            22 => set(attrs, |o| {
                o.bold = Some(false);
                o.dim = Some(false);
            }),
            23 => set(attrs, |o| o.italic = Some(false)),
            24 => set(attrs, |o| o.underline = Some(false)),
            25 => set(attrs, |o| o.blink = Some(false)),
            27 => set(attrs, |o| o.inverse = Some(false)),
            28 => set(attrs, |o| o.hidden = Some(false)),
            29 => set(attrs, |o| o.strikethrough = Some(false)),
            30..=37 => attrs.with_foreground(Color::ansi(code - 30, false)),
            39 => attrs.with_foreground(Color::Default),
            40..=47 => attrs.with_background(Color::ansi(code - 40, false)),
            49 => attrs.with_background(Color::Default),
            90..=97 => attrs.with_foreground(Color::ansi(code - 90, true)),
            100..=107 => attrs.with_background(Color::ansi(code - 100, true)),
            38 | 48 => match extended_color(&params[i + 1..]) {
                Some((color, consumed)) => {
                    i += consumed;
                    if code == 38 {
                        attrs.with_foreground(color)
                    } else {
                        attrs.with_background(color)
                    }
                }
                None => attrs,
            },
            _ => {
                log::trace!("Ignoring SGR code {}", code);
                attrs
            }
        };
        i += 1;
    }

    attrs
}

/// Decode the sub-parameters following 38/48.
///
/// Returns the color and how many parameters it consumed.
fn extended_color(rest: &[u16]) -> Option<(Color, usize)> {
    match rest {
        [5, index, ..] => Some((Color::palette_clamped(*index), 2)),
        [2, r, g, b, ..] => Some((Color::rgb_clamped(*r, *g, *b), 4)),
        _ => None,
    }
}

fn set(attrs: TextAttributes, f: impl FnOnce(&mut AttributeOverrides)) -> TextAttributes {
    let mut overrides = AttributeOverrides::default();
    f(&mut overrides);
    attrs.with(overrides)
}

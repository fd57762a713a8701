// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timeline colours.
//!
//! Night and day cells are solid fills; dawn and dusk cells are horizontal
//! gradients between the night and day colours, with stops at 13% and 86%
//! of the cell width.

use crate::timeline::DayPhase;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gradient stops as fractions of the cell width.
pub const GRADIENT_STOPS: (f64, f64) = (0.13, 0.86);

/// An sRGB colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`.
    pub fn parse(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize, len: usize| u8::from_str_radix(&digits[i..i + len], 16).ok();
        match digits.len() {
            3 => Some(Self::new(
                channel(0, 1)? * 0x11,
                channel(1, 1)? * 0x11,
                channel(2, 1)? * 0x11,
            )),
            6 => Some(Self::new(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
            _ => None,
        }
    }

    /// Linear blend towards `other`; `t` is clamped to `0..=1`.
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Background of a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fill {
    Solid(Rgb),
    Gradient { from: Rgb, to: Rgb },
}

impl Fill {
    /// Colour at `x`, a fraction of the cell width from its left edge.
    pub fn color_at(&self, x: f64) -> Rgb {
        match *self {
            Fill::Solid(color) => color,
            Fill::Gradient { from, to } => {
                let (start, end) = GRADIENT_STOPS;
                from.mix(to, (x - start) / (end - start))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellStyle {
    pub fill: Fill,
    pub text: Rgb,
}

/// The colour scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Palette {
    pub night: Rgb,
    pub day: Rgb,
    pub night_text: Rgb,
    pub day_text: Rgb,
    pub background: Rgb,
    pub text_lighter: Rgb,
    pub text_darker: Rgb,
    pub white: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            night: Rgb::new(0x0A, 0x28, 0x75),
            day: Rgb::new(0xFF, 0xED, 0xC0),
            night_text: Rgb::new(0x90, 0xAF, 0xFF),
            day_text: Rgb::new(0x0A, 0x28, 0x75),
            background: Rgb::new(0x0A, 0x28, 0x75),
            text_lighter: Rgb::new(0xFD, 0xFD, 0xFF),
            text_darker: Rgb::new(0x4B, 0x67, 0xAD),
            white: Rgb::new(0xFF, 0xFF, 0xFF),
        }
    }
}

impl Palette {
    pub fn cell_style(&self, phase: DayPhase) -> CellStyle {
        match phase {
            DayPhase::Night => CellStyle {
                fill: Fill::Solid(self.night),
                text: self.night_text,
            },
            DayPhase::Dawn => CellStyle {
                fill: Fill::Gradient {
                    from: self.night,
                    to: self.day,
                },
                text: self.day_text,
            },
            DayPhase::Day => CellStyle {
                fill: Fill::Solid(self.day),
                text: self.day_text,
            },
            DayPhase::Dusk => CellStyle {
                fill: Fill::Gradient {
                    from: self.day,
                    to: self.night,
                },
                text: self.day_text,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Rgb::parse("#FFF"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::parse("#0A2875"), Some(Rgb::new(0x0A, 0x28, 0x75)));
        assert_eq!(Rgb::parse("#0a2875"), Some(Rgb::new(0x0A, 0x28, 0x75)));
        assert_eq!(Rgb::parse("0A2875"), None);
        assert_eq!(Rgb::parse("#0A287"), None);
        assert_eq!(Rgb::parse("#GGGGGG"), None);
    }

    #[test]
    fn default_palette_values() {
        let p = Palette::default();
        assert_eq!(p.night.to_string(), "#0A2875");
        assert_eq!(p.day.to_string(), "#FFEDC0");
        assert_eq!(p.night_text.to_string(), "#90AFFF");
        assert_eq!(p.text_darker.to_string(), "#4B67AD");
        assert_eq!(Some(p.white), Rgb::parse("#FFF"));
    }

    #[test]
    fn phase_styles() {
        let p = Palette::default();
        assert_eq!(p.cell_style(DayPhase::Night).fill, Fill::Solid(p.night));
        assert_eq!(p.cell_style(DayPhase::Night).text, p.night_text);
        assert_eq!(p.cell_style(DayPhase::Day).text, p.day_text);
        let dawn = p.cell_style(DayPhase::Dawn).fill;
        assert_eq!(dawn.color_at(0.0), p.night);
        assert_eq!(dawn.color_at(1.0), p.day);
        let dusk = p.cell_style(DayPhase::Dusk).fill;
        assert_eq!(dusk.color_at(0.1), p.day);
        assert_eq!(dusk.color_at(0.9), p.night);
    }

    #[test]
    fn mix_midpoint() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.mix(white, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(black.mix(white, 2.0), white);
    }
}

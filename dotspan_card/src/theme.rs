// Copyright 2025 the DotSpan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

/// The default rainbow cycle: sixteen hues applied per-cell by index.
///
/// Cell `i` takes color `i % 16`, so the seventeenth cell repeats the first.
pub const DEFAULT_RAINBOW: [Color; 16] = [
    Color::from_rgb8(0xf8, 0x71, 0x71),
    Color::from_rgb8(0xfb, 0x92, 0x3c),
    Color::from_rgb8(0xfb, 0xbf, 0x24),
    Color::from_rgb8(0xfa, 0xcc, 0x15),
    Color::from_rgb8(0xa3, 0xe6, 0x35),
    Color::from_rgb8(0x4a, 0xde, 0x80),
    Color::from_rgb8(0x34, 0xd3, 0x99),
    Color::from_rgb8(0x2d, 0xd4, 0xbf),
    Color::from_rgb8(0x22, 0xd3, 0xee),
    Color::from_rgb8(0x38, 0xbd, 0xf8),
    Color::from_rgb8(0x60, 0xa5, 0xfa),
    Color::from_rgb8(0x81, 0x8c, 0xf8),
    Color::from_rgb8(0xa7, 0x8b, 0xfa),
    Color::from_rgb8(0xe8, 0x79, 0xf9),
    Color::from_rgb8(0xf4, 0x72, 0xb6),
    Color::from_rgb8(0xfb, 0x71, 0x85),
];

/// Color palette shared by the live grid and the card rasterizer.
///
/// A `Theme` is a plain value passed into both render paths, so the two can
/// never disagree about the active palette. [`Theme::dotspan`] is the stock
/// palette; embedders may construct their own.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Page background behind the card.
    pub app_bg: Color,
    /// Card surface color, also the default export background.
    pub surface: Color,
    /// Hairline border color.
    pub border: Color,
    /// Primary text color.
    pub text: Color,
    /// Secondary text color for progress lines and footers.
    pub muted: Color,
    /// Tertiary text color.
    pub subtle: Color,
    /// Brand accent.
    pub brand: Color,
    /// Translucent brand wash.
    pub brand_soft: Color,
    /// First stop of the decorative gradient.
    pub gradient_from: Color,
    /// Middle stop of the decorative gradient.
    pub gradient_mid: Color,
    /// Last stop of the decorative gradient.
    pub gradient_to: Color,
    /// Fill for elapsed cells in the classic dot style.
    pub dot_filled: Color,
    /// Fill for cells that have not elapsed yet.
    pub dot_empty: Color,
    /// Axis index label color.
    pub axis_text: Color,
    /// Per-cell hue cycle for the rainbow dot style.
    pub rainbow: Vec<Color>,
}

impl Theme {
    /// Returns the stock DotSpan palette.
    #[must_use]
    pub fn dotspan() -> Self {
        Self {
            app_bg: Color::from_rgb8(0xf5, 0xf5, 0xf5),
            surface: Color::from_rgb8(0xff, 0xff, 0xff),
            border: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            text: Color::from_rgb8(0x11, 0x18, 0x27),
            muted: Color::from_rgb8(0x6b, 0x72, 0x80),
            subtle: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            brand: Color::from_rgb8(0x00, 0xc5, 0x65),
            brand_soft: Color::from_rgba8(0x00, 0xc5, 0x65, 56),
            gradient_from: Color::from_rgb8(0x3a, 0x8f, 0x7a),
            gradient_mid: Color::from_rgb8(0xf0, 0x8a, 0x7a),
            gradient_to: Color::from_rgb8(0x2f, 0xb8, 0xc8),
            dot_filled: Color::from_rgb8(0x11, 0x18, 0x27),
            dot_empty: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            axis_text: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            rainbow: DEFAULT_RAINBOW.to_vec(),
        }
    }

    /// Returns the rainbow color for a cell index.
    ///
    /// The cycle wraps by `index % rainbow.len()`; an empty cycle falls back
    /// to [`Theme::dot_filled`].
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the modulo keeps the index below the palette length, which is a usize"
    )]
    pub fn rainbow_color(&self, index: u64) -> Color {
        if self.rainbow.is_empty() {
            return self.dot_filled;
        }
        let len = self.rainbow.len() as u64;
        self.rainbow[(index % len) as usize]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dotspan()
    }
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorParseError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Debug for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColorParseError {{ input: {:?} }}", self.input)
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} is not a hex color; expected #rgb, #rrggbb, or #rrggbbaa",
            self.input
        )
    }
}

impl core::error::Error for ColorParseError {}

/// Parses a CSS-style hex color: `#rgb`, `#rrggbb`, or `#rrggbbaa`.
///
/// The leading `#` is optional and hex digits are case-insensitive.
pub fn parse_hex_color(input: &str) -> Result<Color, ColorParseError> {
    let err = || ColorParseError {
        input: String::from(input),
    };
    let digits = input.strip_prefix('#').unwrap_or(input);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(err());
    }

    let nibble = |b: u8| -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    };
    let pair = |hi: u8, lo: u8| -> u8 { (nibble(hi) << 4) | nibble(lo) };

    let b = digits.as_bytes();
    match b.len() {
        3 => Ok(Color::from_rgb8(
            pair(b[0], b[0]),
            pair(b[1], b[1]),
            pair(b[2], b[2]),
        )),
        6 => Ok(Color::from_rgb8(
            pair(b[0], b[1]),
            pair(b[2], b[3]),
            pair(b[4], b[5]),
        )),
        8 => Ok(Color::from_rgba8(
            pair(b[0], b[1]),
            pair(b[2], b[3]),
            pair(b[4], b[5]),
            pair(b[6], b[7]),
        )),
        _ => Err(err()),
    }
}

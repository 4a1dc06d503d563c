// RGBA colors, hex parsing and the "same color" rule used by the bucket.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::Error;

/// One RGBA pixel value, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Swatches offered by the palette keys 1..=9, in key order.
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#F6C1CC", "#FFD6A5", "#BEE1E6",
    "#CDB4DB", "#BDB2FF", "#FFADAD",
    "#A3C4BC", "#FFF1A8", "#000000",
];

/// Warm off-white the line art sits on.
pub const PAPER: Color = Color::rgb(0xF6, 0xF2, 0xEC);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Opaque color from three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color for fill purposes (see [`colors_match`]).
    #[inline]
    pub fn matches(&self, other: &Color) -> bool {
        colors_match(*self, *other)
    }

    /// Pack as 0x00RRGGBB, the layout minifb expects (alpha dropped).
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// RGB-only equality. Alpha is ignored so anti-aliased, partially
/// transparent pixels of one hue belong to the same region.
#[inline]
pub fn colors_match(a: Color, b: Color) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b
}

/// Parse `RRGGBB` or `#RRGGBB` into an opaque color.
pub fn color_from_hex_string(hex: &str) -> Result<Color, Error> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // `from_str_radix` alone would accept a leading '+'
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColorFormat(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| Error::InvalidColorFormat(hex.to_string()))
    };
    Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        color_from_hex_string(s)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

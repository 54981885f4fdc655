//! Color types for chart items.
//!
//! Provides an RGBA color representation, hex parsing for colors supplied
//! by the scanning backend, and the categorical palette used when the
//! backend supplies none.

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

/// Categorical tile palette, assigned by item rank when the backend does
/// not provide a color.
pub const CATEGORICAL: [Rgba; 12] = [
    Rgba::rgb(0x3B, 0x82, 0xF6), // blue
    Rgba::rgb(0x22, 0xC5, 0x5E), // green
    Rgba::rgb(0xEA, 0xB3, 0x08), // yellow
    Rgba::rgb(0xA8, 0x55, 0xF7), // purple
    Rgba::rgb(0xEF, 0x44, 0x44), // red
    Rgba::rgb(0x63, 0x66, 0xF1), // indigo
    Rgba::rgb(0xEC, 0x48, 0x99), // pink
    Rgba::rgb(0x6B, 0x72, 0x80), // gray
    Rgba::rgb(0xF9, 0x73, 0x16), // orange
    Rgba::rgb(0x14, 0xB8, 0xA6), // teal
    Rgba::rgb(0x06, 0xB6, 0xD4), // cyan
    Rgba::rgb(0x84, 0xCC, 0x16), // lime
];

/// Neutral grey reserved for the synthetic "Others" bucket.
pub const OTHERS: Rgba = Rgba::rgb(0x9C, 0xA3, 0xAF);

/// Palette color for an item rank, cycling past the palette length.
#[must_use]
pub fn palette_color(index: usize) -> Rgba {
    CATEGORICAL[index % CATEGORICAL.len()]
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex string.
    ///
    /// The leading `#` is optional. Anything else is rejected with
    /// [`Error::InvalidColor`].
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || Error::InvalidColor(hex.to_string());

        let parse = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };

        match digits.len() {
            6 => {
                let r = parse(0..2).ok_or_else(invalid)?;
                let g = parse(2..4).ok_or_else(invalid)?;
                let b = parse(4..6).ok_or_else(invalid)?;
                Ok(Self::rgb(r, g, b))
            }
            8 => {
                let r = parse(0..2).ok_or_else(invalid)?;
                let g = parse(2..4).ok_or_else(invalid)?;
                let b = parse(4..6).ok_or_else(invalid)?;
                let a = parse(6..8).ok_or_else(invalid)?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid()),
        }
    }

    /// Format as a `#RRGGBB` hex string (alpha omitted when opaque).
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

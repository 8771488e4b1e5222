// SPDX-License-Identifier: MIT
//
// Packed 8-bit ARGB, the only color type exchanged with the outside world.
//
// Everything perceptual (CAM16, HCT, tones) is derived from an `Argb` and
// resolved back into one. Keeping the boundary type this small makes it
// trivial to hand results to a UI toolkit, a terminal, or a stylesheet.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A color packed as `0xAARRGGBB`.
///
/// # Examples
///
/// ```
/// use tonekit_hct::Argb;
///
/// let purple = Argb::from_rgb(0x67, 0x50, 0xa4);
/// assert_eq!(purple.to_u32(), 0xff67_50a4);
/// assert_eq!(purple.to_string(), "#6750a4");
///
/// let parsed: Argb = "#6750A4".parse().unwrap();
/// assert_eq!(parsed, purple);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xff00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self(0xffff_ffff);

    /// Build an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Build a color from 8-bit channels including alpha.
    #[inline]
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#AARRGGBB` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Empty`], [`ColorError::InvalidHex`] or
    /// [`ColorError::InvalidLength`] for malformed input.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Whether the alpha channel is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00ff_ffff) | (alpha as u32) << 24)
    }

    /// `#rrggbb`, or `#aarrggbb` when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:06x}", self.0 & 0x00ff_ffff)
        } else {
            format!("#{:08x}", self.0)
        }
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(0x{:08x})", self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Argb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Argb, ColorError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(bad));
    }

    let bytes = digits.as_bytes();
    match bytes.len() {
        // #RGB
        3 => {
            let r = hex_digit(bytes[0]);
            let g = hex_digit(bytes[1]);
            let b = hex_digit(bytes[2]);
            Ok(Argb::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => Ok(Argb::from_rgb(
            hex_byte(&bytes[0..2]),
            hex_byte(&bytes[2..4]),
            hex_byte(&bytes[4..6]),
        )),
        // #AARRGGBB
        8 => Ok(Argb::from_argb(
            hex_byte(&bytes[0..2]),
            hex_byte(&bytes[2..4]),
            hex_byte(&bytes[4..6]),
            hex_byte(&bytes[6..8]),
        )),
        len => Err(ColorError::InvalidLength(len)),
    }
}

// Digits are validated before these are called.
#[inline]
const fn hex_digit(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[inline]
const fn hex_byte(pair: &[u8]) -> u8 {
    hex_digit(pair[0]) << 4 | hex_digit(pair[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

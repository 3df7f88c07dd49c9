//! RGB triples, canonical hex encoding, and the squared-distance metric.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ColorParseError;

/// An 8-bit-per-channel sRGB triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Canonical `#RRGGBB` encoding with uppercase digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a six-digit hex color, with or without the leading `#`.
    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(trimmed.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidHex(trimmed.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Only relative ordering matters for matching, so the square root is
    /// never taken. The maximum is `3 * 255^2`, well inside `u32`.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(px: image::Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R={}, G={}, B={}", self.r, self.g, self.b)
    }
}

/// Parse a single decimal channel value in `0..=255`.
pub fn parse_channel(text: &str) -> Result<u8, ColorParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u8>()
        .map_err(|_| ColorParseError::InvalidChannel(trimmed.to_string()))
}

/// Accepts `#RRGGBB`, `RRGGBB`, or decimal `r,g,b`.
impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !trimmed.contains(',') {
            return Self::from_hex(trimmed);
        }
        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ChannelCount(parts.len()));
        }
        Ok(Self::new(
            parse_channel(parts[0])?,
            parse_channel(parts[1])?,
            parse_channel(parts[2])?,
        ))
    }
}

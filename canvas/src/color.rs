//! Stroke colors and CSS hex parsing.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a `#RGB` / `#RRGGBB` / `#RRGGBBAA` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("expected 3, 6 or 8 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digit in color {0:?}")]
    BadDigit(String),
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the string is not a hex color.
    pub fn parse_hex(raw: &str) -> Result<Self, ColorError> {
        let trimmed = raw.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ColorError::MissingHash(trimmed.to_string()));
        };
        let nibbles = hex
            .bytes()
            .map(nibble)
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| ColorError::BadDigit(trimmed.to_string()))?;
        let byte = |hi: u8, lo: u8| (hi << 4) | lo;
        match *nibbles.as_slice() {
            [r, g, b] => Ok(Self::rgb(byte(r, r), byte(g, g), byte(b, b))),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(byte(r1, r0), byte(g1, g0), byte(b1, b0))),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self { r: byte(r1, r0), g: byte(g1, g0), b: byte(b1, b0), a: byte(a1, a0) }),
            _ => Err(ColorError::BadLength(nibbles.len())),
        }
    }

    /// Canonical lowercase CSS form: `#rrggbb` when opaque, else `#rrggbbaa`.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_css()
    }
}

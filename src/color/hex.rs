//! Hex color strings
//!
//! Colors are exchanged with the UI as `#rrggbb` strings. Output is always
//! canonical: `#`-prefixed, zero-padded, lower-case.

use core::fmt;
use core::str::FromStr;

use heapless::String;

use super::Rgb;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Number of hex digits in a `RRGGBB` color
const DIGITS_LEN: usize = 6;

/// Error returned when a string is not a `#RRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormatError {
    /// The leading `#` is missing
    MissingPrefix,
    /// Wrong number of characters after the `#`
    InvalidLength(usize),
    /// A character that is not a hex digit
    InvalidDigit(char),
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => f.write_str("invalid color format: missing '#' prefix"),
            Self::InvalidLength(len) => {
                write!(f, "invalid color format: expected 6 hex digits, got {len}")
            }
            Self::InvalidDigit(c) => write!(f, "invalid color format: {c:?} is not a hex digit"),
        }
    }
}

impl core::error::Error for ColorFormatError {}

/// Canonical `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColor {
    rgb: Rgb,
    text: String<7>,
}

impl HexColor {
    /// Encode a color
    pub fn from_rgb(rgb: Rgb) -> Self {
        let mut text = String::new();
        let _ = text.push('#');
        for channel in [rgb.r, rgb.g, rgb.b] {
            let _ = text.push(char::from(HEX_DIGITS[usize::from(channel >> 4)]));
            let _ = text.push(char::from(HEX_DIGITS[usize::from(channel & 0x0F)]));
        }
        Self { rgb, text }
    }

    /// Strictly parse a `#RRGGBB` string (digits are case-insensitive)
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        let digits = s
            .strip_prefix('#')
            .ok_or(ColorFormatError::MissingPrefix)?;
        decode_digits(digits).map(Self::from_rgb)
    }

    /// Parsed color
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Canonical string form
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl FromStr for HexColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Parse a hex color with an optional `#` prefix
///
/// Returns `None` unless the input is exactly six hex digits after the
/// optional prefix. Shorthand (`#fff`) is not supported.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    decode_digits(digits).ok()
}

/// Encode channels as a canonical hex color
///
/// Channels outside 0-255 are clamped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> HexColor {
    let channel = |value: i32| value.clamp(0, 255) as u8;
    HexColor::from_rgb(Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    })
}

fn decode_digits(digits: &str) -> Result<Rgb, ColorFormatError> {
    let bytes = digits.as_bytes();
    if bytes.len() != DIGITS_LEN {
        return Err(ColorFormatError::InvalidLength(digits.chars().count()));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::InvalidDigit(c));
    }

    let byte = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
    Ok(Rgb {
        r: byte(0),
        g: byte(2),
        b: byte(4),
    })
}

/// Value of an ASCII hex digit, already validated by the caller
const fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

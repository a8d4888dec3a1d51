//! RGB color type and hex token parsing

use thiserror::Error;

/// Errors produced when parsing a hex color token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Token had a digit count other than 3 or 6
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),

    /// Token contained a non-hex character
    #[error("invalid hex digit in color token `{0}`")]
    InvalidDigit(String),
}

/// RGB color, channels normalized to [0,1].
///
/// Produced by [`parse_hex`] and consumed by HSL conversion; tenant
/// color tokens never carry an alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Parse a `#RGB` or `#RRGGBB` color token (leading `#` optional).
///
/// 3-digit tokens expand by digit duplication, so `#abc` parses the same
/// as `#aabbcc`.
pub fn parse_hex(token: &str) -> Result<Color, ColorParseError> {
    let hex = token.trim().trim_start_matches('#');
    // from_str_radix tolerates a leading sign; only bare hex digits are a
    // valid token (also keeps the slicing below on char boundaries)
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit(token.to_string()));
    }

    let digit = |range: &str| -> Result<u8, ColorParseError> {
        u8::from_str_radix(range, 16).map_err(|_| ColorParseError::InvalidDigit(token.to_string()))
    };

    let (r, g, b) = match hex.len() {
        3 => (
            digit(&hex[0..1].repeat(2))?,
            digit(&hex[1..2].repeat(2))?,
            digit(&hex[2..3].repeat(2))?,
        ),
        6 => (digit(&hex[0..2])?, digit(&hex[2..4])?, digit(&hex[4..6])?),
        len => return Err(ColorParseError::InvalidLength(len)),
    };

    Ok(Color::rgb(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
    ))
}

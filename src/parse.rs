//! Text parsing for hex and `rgb(r, g, b)` colors.

use crate::types::{ColorError, Rgb};

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses exactly six hex digits with no prefix.
///
/// A leading `#` is reported as an invalid digit at index 0.
pub fn parse_hex_digits(digits: &str) -> Result<Rgb, ColorError> {
    let bytes = digits.as_bytes();
    if bytes.is_empty() {
        return Err(ColorError::Empty);
    }
    if bytes.len() != 6 {
        return Err(ColorError::InvalidLength { found: bytes.len() });
    }

    let byte_at = |i: usize| -> Result<u8, ColorError> {
        let hi = nibble(bytes[i]).ok_or(ColorError::InvalidHexDigit { index: i })?;
        let lo = nibble(bytes[i + 1]).ok_or(ColorError::InvalidHexDigit { index: i + 1 })?;
        Ok(hi << 4 | lo)
    };

    Ok(Rgb::new(byte_at(0)?, byte_at(2)?, byte_at(4)?))
}

/// Parses `RRGGBB` or `#RRGGBB`, case-insensitive.
pub fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    parse_hex_digits(hex.strip_prefix('#').unwrap_or(hex))
}

/// Narrows an integer to a channel.
#[inline]
pub fn channel_from_int(value: i32) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { value })
}

/// Parses one decimal channel, ignoring surrounding whitespace.
pub fn parse_channel(text: &str) -> Result<u8, ColorError> {
    let value: i32 = text.trim().parse().map_err(|_| ColorError::NotANumber)?;
    channel_from_int(value)
}

fn strip_rgb_prefix(text: &str) -> Option<&str> {
    let head = text.get(..4)?;
    if head.eq_ignore_ascii_case("rgb(") {
        text.get(4..)
    } else {
        None
    }
}

/// Parses the CSS functional notation `rgb(r, g, b)`.
pub fn parse_rgb_function(text: &str) -> Result<Rgb, ColorError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorError::Empty);
    }

    let inner = strip_rgb_prefix(text)
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ColorError::MalformedRgbFunction)?;

    let mut parts = inner.split(',');
    let mut channels = [0u8; 3];
    for slot in channels.iter_mut() {
        let part = parts.next().ok_or(ColorError::MalformedRgbFunction)?;
        *slot = parse_channel(part)?;
    }
    if parts.next().is_some() {
        return Err(ColorError::MalformedRgbFunction);
    }

    let [r, g, b] = channels;
    Ok(Rgb::new(r, g, b))
}

/// Parses any supported notation: `RRGGBB`, `#RRGGBB` or `rgb(r, g, b)`.
pub fn parse_color(text: &str) -> Result<Rgb, ColorError> {
    let text = text.trim();
    if strip_rgb_prefix(text).is_some() {
        parse_rgb_function(text)
    } else {
        parse_hex(text)
    }
}

//! Core color types shared by the converter, the surface mapper and the picker.

use core::fmt::{self, Write};
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use heapless::String;
use palette::{Hsv, Srgb};

use crate::colors;
use crate::parse;

/// 8-bit RGB triple, the canonical external representation.
pub type Rgb = Srgb<u8>;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Continuous HSV: hue in degrees, saturation and value in 0.0-1.0.
pub type HsvColor = Hsv;

/// Color parsing and validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Input was empty.
    Empty,

    /// Hex input did not contain exactly six digits.
    InvalidLength {
        /// Number of bytes found after the optional `#`.
        found: usize,
    },

    /// A byte that is not a hex digit.
    InvalidHexDigit {
        /// Byte offset of the offending character.
        index: usize,
    },

    /// An integer channel outside 0-255.
    ChannelOutOfRange {
        /// The rejected value.
        value: i32,
    },

    /// Channel text was not an integer.
    NotANumber,

    /// `rgb(...)` text with the wrong shape or arity.
    MalformedRgbFunction,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Empty => write!(f, "empty color string"),
            ColorError::InvalidLength { found } => {
                write!(f, "hex color must have 6 digits, found {}", found)
            }
            ColorError::InvalidHexDigit { index } => {
                write!(f, "invalid hex digit at index {}", index)
            }
            ColorError::ChannelOutOfRange { value } => {
                write!(f, "channel value {} is outside 0-255", value)
            }
            ColorError::NotANumber => write!(f, "channel is not an integer"),
            ColorError::MalformedRgbFunction => {
                write!(f, "expected rgb(r, g, b) with three channels")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}

/// A validated six-digit uppercase hex color, without the `#` prefix.
///
/// `Display` prints the bare digits (`"3B82F6"`); the alternate form
/// (`{:#}`) prints the presentation form with a leading `#`.
#[derive(Debug, Clone)]
pub struct HexColor {
    digits: String<6>,
    rgb: Rgb,
}

impl HexColor {
    /// Formats an RGB triple as six uppercase hex digits.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let mut digits = String::new();
        for channel in [rgb.red, rgb.green, rgb.blue] {
            for nibble in [channel >> 4, channel & 0x0F] {
                if digits.push(char::from(HEX_DIGITS[usize::from(nibble)])).is_err() {
                    break;
                }
            }
        }
        HexColor { digits, rgb }
    }

    /// The digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.digits.as_str()
    }

    /// The channels the digits encode.
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for HexColor {}

impl Hash for HexColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

impl Default for HexColor {
    fn default() -> Self {
        HexColor::from_rgb(crate::BLACK)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_char('#')?;
        }
        f.write_str(self.as_str())
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    /// Accepts `RRGGBB` or `#RRGGBB` in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_hex(s).map(HexColor::from_rgb)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        HexColor::from_rgb(rgb)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for HexColor {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// The currently selected color in all three views.
///
/// The views are derived together on construction, so `rgb` always equals
/// `hsv_to_rgb(hsv)` and `hex` always equals `rgb_to_hex(rgb)`. There are no
/// setters; a new selection replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedColor {
    hsv: HsvColor,
    rgb: Rgb,
    hex: HexColor,
}

impl PickedColor {
    /// Builds a color from HSV components. Out-of-range components are
    /// clamped (hue to 0-360, with 360 folding to 0).
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let hsv = colors::normalize_hsv(hue, saturation, value);
        let rgb = colors::hsv_to_rgb(hsv);
        Self {
            hsv,
            rgb,
            hex: HexColor::from_rgb(rgb),
        }
    }

    /// Builds a color from RGB channels.
    ///
    /// The HSV view is derived with [`colors::rgb_to_hsv`] and the channels
    /// are re-derived from it, keeping the views consistent.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let hsv = colors::rgb_to_hsv(rgb);
        Self::from_hsv(hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value)
    }

    /// HSV view.
    #[inline]
    pub fn hsv(&self) -> HsvColor {
        self.hsv
    }

    /// RGB view.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Hex view.
    #[inline]
    pub fn hex(&self) -> &HexColor {
        &self.hex
    }

    /// Hue in degrees, 0.0 to below 360.0.
    #[inline]
    pub fn hue(&self) -> f32 {
        self.hsv.hue.into_positive_degrees()
    }

    #[inline]
    pub fn saturation(&self) -> f32 {
        self.hsv.saturation
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.hsv.value
    }
}

impl Default for PickedColor {
    /// Black: hue 0, saturation 0, value 0.
    fn default() -> Self {
        PickedColor::from_hsv(0.0, 0.0, 0.0)
    }
}

impl fmt::Display for PickedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hex, f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PickedColor {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PickedColor({=str})", self.hex.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn hex_color_formats_uppercase_without_prefix() {
        let hex = HexColor::from_rgb(Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(hex.as_str(), "3B82F6");
        assert_eq!(format!("{}", hex), "3B82F6");
        assert_eq!(format!("{:#}", hex), "#3B82F6");
    }

    #[test]
    fn hex_color_pads_single_digit_channels() {
        let hex = HexColor::from_rgb(Rgb::new(1, 2, 3));
        assert_eq!(hex.as_str(), "010203");
    }

    #[test]
    fn hex_color_parses_with_optional_prefix() {
        let bare: HexColor = "ff8000".parse().unwrap();
        let prefixed: HexColor = "#FF8000".parse().unwrap();
        assert_eq!(bare, prefixed);
        assert_eq!(bare.as_str(), "FF8000");
        assert_eq!(bare.to_rgb(), Rgb::new(255, 128, 0));
    }

    #[test]
    fn hex_color_digits_and_channels_agree_for_every_byte() {
        for byte in 0..=255u8 {
            let rgb = Rgb::new(byte, 255 - byte, byte / 3);
            let hex = HexColor::from_rgb(rgb);
            assert_eq!(hex.to_rgb(), rgb);
            assert_eq!(hex.as_str(), format!("{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue));
            assert_eq!(parse::parse_hex_digits(hex.as_str()), Ok(rgb));
        }
    }

    #[test]
    fn hex_color_rejects_bad_input() {
        assert_eq!(
            "FFF".parse::<HexColor>(),
            Err(ColorError::InvalidLength { found: 3 })
        );
        assert_eq!(
            HexColor::try_from("zzzzzz"),
            Err(ColorError::InvalidHexDigit { index: 0 })
        );
    }

    #[test]
    fn default_picked_color_is_black() {
        let color = PickedColor::default();
        assert_eq!(color.rgb(), Rgb::new(0, 0, 0));
        assert_eq!(color.hex().as_str(), "000000");
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 0.0);
        assert_eq!(color.value(), 0.0);
    }

    #[test]
    fn picked_color_views_agree() {
        let color = PickedColor::from_hsv(200.0, 0.4, 0.7);
        assert_eq!(color.rgb(), colors::hsv_to_rgb(color.hsv()));
        assert_eq!(color.hex(), &HexColor::from_rgb(color.rgb()));
    }

    #[test]
    fn picked_color_clamps_components() {
        let color = PickedColor::from_hsv(400.0, 1.5, -0.2);
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.value(), 0.0);
    }

    #[test]
    fn error_display_is_readable() {
        let msg = format!("{}", ColorError::InvalidLength { found: 4 });
        assert_eq!(msg, "hex color must have 6 digits, found 4");
    }
}

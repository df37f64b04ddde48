//! Color space conversion between RGB, HSV and hex.
//!
//! All functions are pure. HSV saturation and value use unit fractions
//! (0.0-1.0) unless the function name says otherwise; hue is in degrees.
//! RGB channels are 8-bit.
//!
//! HSV to RGB is the classic six-sector algorithm: the hue picks a sector
//! of 60 degrees and the channels are a fixed permutation of the value and
//! the three intermediate terms `p`, `q` and `t`. Channels are rounded to
//! the nearest integer, so an RGB round trip through HSV stays within one
//! step per channel.

use palette::Hsv;

use crate::parse;
use crate::types::{ColorError, HexColor, HsvColor, Rgb};

/// Full turn in degrees.
pub const HUE_TURN: f32 = 360.0;

/// Degrees covered by one hue sector.
const SECTOR_DEGREES: f32 = 60.0;

#[inline]
fn clamp_unit(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Clamps a hue to 0-360 and folds 360 back to 0.
#[inline]
fn clamp_hue(hue: f32) -> f32 {
    let hue = if hue.is_nan() { 0.0 } else { hue.clamp(0.0, HUE_TURN) };
    if hue >= HUE_TURN { 0.0 } else { hue }
}

#[inline]
fn to_channel(unit: f32) -> u8 {
    libm::roundf(unit * 255.0).clamp(0.0, 255.0) as u8
}

/// Builds an in-range HSV value from raw components.
pub fn normalize_hsv(hue: f32, saturation: f32, value: f32) -> HsvColor {
    Hsv::new(clamp_hue(hue), clamp_unit(saturation), clamp_unit(value))
}

/// Converts HSV components to RGB.
///
/// Hue is clamped to 0-360 (360 is the same angle as 0); saturation and
/// value are clamped to 0.0-1.0.
pub fn hsv_components_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let h = clamp_hue(hue);
    let s = clamp_unit(saturation);
    let v = clamp_unit(value);

    if s == 0.0 {
        let gray = to_channel(v);
        return Rgb::new(gray, gray, gray);
    }

    let sector = h / SECTOR_DEGREES;
    let i = libm::floorf(sector);
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

/// Converts an HSV color to RGB. Hue wraps as an angle.
#[inline]
pub fn hsv_to_rgb(hsv: HsvColor) -> Rgb {
    hsv_components_to_rgb(hsv.hue.into_positive_degrees(), hsv.saturation, hsv.value)
}

/// Converts HSV with saturation and value given as percentages (0-100).
#[inline]
pub fn hsv_percent_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    hsv_components_to_rgb(
        hue,
        saturation.clamp(0.0, 100.0) / 100.0,
        value.clamp(0.0, 100.0) / 100.0,
    )
}

/// Converts RGB to HSV.
///
/// Grays (all channels equal) map to hue 0 and saturation 0. Otherwise the
/// smallest channel selects the hue sector: red smallest puts the hue in
/// 120-240, blue smallest in 0-120 and green smallest in 240-360.
pub fn rgb_to_hsv(rgb: Rgb) -> HsvColor {
    let (r, g, b) = (i32::from(rgb.red), i32::from(rgb.green), i32::from(rgb.blue));
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let value = max as f32 / 255.0;

    if min == max {
        return Hsv::new(0.0_f32, 0.0, value);
    }

    let delta = (max - min) as f32;
    let (d, base) = if r == min {
        (g - b, 3.0)
    } else if b == min {
        (r - g, 1.0)
    } else {
        (b - r, 5.0)
    };

    let hue = SECTOR_DEGREES * (base - d as f32 / delta);
    let saturation = delta / max as f32;

    Hsv::new(clamp_hue(hue), saturation, value)
}

/// Range-checked RGB to HSV for callers holding wider integers.
pub fn rgb_channels_to_hsv(red: i32, green: i32, blue: i32) -> Result<HsvColor, ColorError> {
    let rgb = Rgb::new(
        parse::channel_from_int(red)?,
        parse::channel_from_int(green)?,
        parse::channel_from_int(blue)?,
    );
    Ok(rgb_to_hsv(rgb))
}

/// Formats RGB as six uppercase hex digits.
#[inline]
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    HexColor::from_rgb(rgb)
}

/// Parses `RRGGBB` or `#RRGGBB`.
#[inline]
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    parse::parse_hex(hex)
}

/// The fully saturated, full-value color for a hue, used to tint the palette.
#[inline]
pub fn base_color(hue: f32) -> Rgb {
    hsv_components_to_rgb(hue, 1.0, 1.0)
}

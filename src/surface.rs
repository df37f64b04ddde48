//! Mapping between pointer positions on the picker surfaces and HSV.
//!
//! Two surfaces are modelled: a 2D palette, where x maps to saturation and
//! y maps to inverted value, and a 1D hue bar, where the position along the
//! bar maps to hue. Positions are region-relative pixels. Pointer positions
//! outside a region are clamped to its edge; dragging past the widget is
//! normal and never an error.

use crate::colors::HUE_TURN;
use crate::fmt::warning;

/// Side length of the reference palette and hue bar, in pixels.
pub const DEFAULT_REGION_SIZE: f32 = 199.0;

/// Indicator size reserved at the far edge of the palette.
pub const PALETTE_CURSOR_MARGIN: f32 = 7.0;

/// Indicator size reserved at the far edge of the hue bar.
pub const HUE_CURSOR_MARGIN: f32 = 5.0;

/// Largest hue the bar reports; the hue domain is half-open.
pub const MAX_BAR_HUE: f32 = 359.0;

/// Position as a fraction of `extent`, clamped to 0.0-1.0.
///
/// Degenerate extents (zero, negative or NaN) map everything to 0.
fn fraction(position: f32, extent: f32) -> f32 {
    if !(extent > 0.0) {
        warning!("degenerate surface extent {}", extent);
        return 0.0;
    }
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, extent) / extent
}

/// Clamps an indicator offset so it stays inside `extent - margin`.
fn clamp_cursor(offset: f32, extent: f32, margin: f32) -> f32 {
    let upper = (extent - margin).max(0.0);
    if offset.is_nan() { 0.0 } else { offset.clamp(0.0, upper) }
}

/// Hue under a pointer at `y` on a bar of `length` pixels.
///
/// The far end of the bar reports 359 rather than 360.
pub fn hue_bar_position_to_hue(y: f32, length: f32) -> f32 {
    if !(length > 0.0) {
        warning!("degenerate hue bar length {}", length);
        return 0.0;
    }
    if !y.is_nan() && y >= length {
        return MAX_BAR_HUE;
    }
    let hue = fraction(y, length) * HUE_TURN;
    if hue >= HUE_TURN { MAX_BAR_HUE } else { hue }
}

/// Offset along a bar of `length` pixels for `hue`.
pub fn hue_to_hue_bar_position(hue: f32, length: f32) -> f32 {
    if !(length > 0.0) || hue.is_nan() {
        return 0.0;
    }
    let hue = hue - libm::floorf(hue / HUE_TURN) * HUE_TURN;
    hue * length / HUE_TURN
}

/// Saturation and value under a pointer at `(x, y)` on a palette.
///
/// Saturation grows to the right, value grows upwards.
pub fn palette_to_saturation_value(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    let saturation = fraction(x, width);
    let value = 1.0 - fraction(y, height);
    (saturation, value)
}

/// Indicator offset on a palette for a saturation/value pair.
///
/// Both axes are clamped so the indicator's `margin`-sized box never passes
/// the far edge.
pub fn saturation_value_to_palette(
    saturation: f32,
    value: f32,
    width: f32,
    height: f32,
    margin: f32,
) -> (f32, f32) {
    let s = if saturation.is_nan() { 0.0 } else { saturation.clamp(0.0, 1.0) };
    let v = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    let x = s * width;
    let y = height - v * height;
    (
        clamp_cursor(x, width, margin),
        clamp_cursor(y, height, margin),
    )
}

/// The 2D saturation/value palette.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PaletteRegion {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Size of the indicator kept inside the far edges.
    pub cursor_margin: f32,
}

impl PaletteRegion {
    /// Creates a palette region with the default indicator margin.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            cursor_margin: PALETTE_CURSOR_MARGIN,
        }
    }

    /// Replaces the indicator margin.
    pub const fn with_cursor_margin(mut self, margin: f32) -> Self {
        self.cursor_margin = margin;
        self
    }

    /// Same margin, new dimensions.
    pub const fn resized(self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            cursor_margin: self.cursor_margin,
        }
    }

    /// Saturation and value under the pointer.
    #[inline]
    pub fn saturation_value_at(&self, x: f32, y: f32) -> (f32, f32) {
        palette_to_saturation_value(x, y, self.width, self.height)
    }

    /// Indicator offset for a saturation/value pair.
    #[inline]
    pub fn cursor_position(&self, saturation: f32, value: f32) -> (f32, f32) {
        saturation_value_to_palette(saturation, value, self.width, self.height, self.cursor_margin)
    }
}

impl Default for PaletteRegion {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_SIZE, DEFAULT_REGION_SIZE)
    }
}

/// The 1D hue bar, measured along its sliding axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HueBarRegion {
    /// Length in pixels.
    pub length: f32,
    /// Size of the indicator kept inside the far end.
    pub cursor_margin: f32,
}

impl HueBarRegion {
    /// Creates a hue bar with the default indicator margin.
    pub const fn new(length: f32) -> Self {
        Self {
            length,
            cursor_margin: HUE_CURSOR_MARGIN,
        }
    }

    /// Replaces the indicator margin.
    pub const fn with_cursor_margin(mut self, margin: f32) -> Self {
        self.cursor_margin = margin;
        self
    }

    /// Same margin, new length.
    pub const fn resized(self, length: f32) -> Self {
        Self {
            length,
            cursor_margin: self.cursor_margin,
        }
    }

    /// Hue under the pointer.
    #[inline]
    pub fn hue_at(&self, y: f32) -> f32 {
        hue_bar_position_to_hue(y, self.length)
    }

    /// Indicator offset for a hue, kept inside `length - cursor_margin`.
    #[inline]
    pub fn cursor_position(&self, hue: f32) -> f32 {
        clamp_cursor(
            hue_to_hue_bar_position(hue, self.length),
            self.length,
            self.cursor_margin,
        )
    }
}

impl Default for HueBarRegion {
    fn default() -> Self {
        Self::new(DEFAULT_REGION_SIZE)
    }
}

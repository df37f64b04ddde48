//! Color picker state with pointer-driven mutation and change notification.
//!
//! Provides [`ColorPicker`], which holds the selected color and the base hue
//! tinting the palette, and the [`OnChange`] trait for the single change
//! observer. The picker knows nothing about input devices or rendering: the
//! UI layer translates pointer events into region-relative coordinates and
//! calls the pointer commands, then asks [`ColorPicker::display_positions`]
//! where to draw the indicators.

use crate::colors;
use crate::command::PickerAction;
use crate::config::{HueSelection, PickerConfig};
use crate::fmt::{debug, trace};
use crate::parse;
use crate::surface::{HueBarRegion, PaletteRegion};
use crate::types::{ColorError, HexColor, HsvColor, PickedColor, Rgb};

/// Receives the new color after every successful picker command.
///
/// The observer only sees the color, never the picker, so it cannot re-enter
/// a command while one is running.
pub trait OnChange {
    /// Called synchronously once the picker state is updated.
    fn on_change(&mut self, color: &PickedColor);
}

impl<F: FnMut(&PickedColor)> OnChange for F {
    fn on_change(&mut self, color: &PickedColor) {
        self(color)
    }
}

/// Observer type of a picker built with [`ColorPicker::new`].
///
/// Capturing closures need their own picker type, see
/// [`ColorPicker::with_observer`].
pub type PlainObserver = fn(&PickedColor);

/// Indicator offsets for the UI layer, in region-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayPositions {
    /// Offset along the hue bar.
    pub hue: f32,
    /// `(x, y)` offset on the palette.
    pub palette: (f32, f32),
}

/// Interactive color picker state.
///
/// Starts at black (`"000000"`) with a red base hue. Commands replace the
/// selected color as a whole and then notify the observer, if one is set.
///
/// # Type Parameters
/// * `O` - Change observer type
pub struct ColorPicker<O: OnChange = PlainObserver> {
    config: PickerConfig,
    color: PickedColor,
    base_hue: f32,
    observer: Option<O>,
}

impl ColorPicker {
    /// Creates a picker with the reference layout.
    pub fn new() -> Self {
        Self::with_config(PickerConfig::default())
    }

    /// Creates a picker with a custom layout.
    pub fn with_config(config: PickerConfig) -> Self {
        Self::build(config, None)
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OnChange> ColorPicker<O> {
    /// Creates a picker with an observer already registered.
    pub fn with_observer(config: PickerConfig, observer: O) -> Self {
        Self::build(config, Some(observer))
    }

    fn build(config: PickerConfig, observer: Option<O>) -> Self {
        Self {
            config,
            color: PickedColor::default(),
            base_hue: 0.0,
            observer,
        }
    }

    /// Registers the change observer, replacing any previous one.
    pub fn set_on_change(&mut self, observer: O) {
        if self.observer.is_some() {
            trace!("replacing change observer");
        }
        self.observer = Some(observer);
    }

    /// Removes the change observer.
    pub fn clear_on_change(&mut self) {
        self.observer = None;
    }

    /// Returns the registered observer, if any.
    pub fn observer(&self) -> Option<&O> {
        self.observer.as_ref()
    }

    /// Handles a picker action by dispatching to the matching command.
    ///
    /// # Returns
    /// * `Ok(())` - State updated and observer notified
    /// * `Err` - Rejected [`PickerAction::SetColor`] input, state unchanged
    pub fn handle_action(&mut self, action: PickerAction<'_>) -> Result<(), ColorError> {
        match action {
            PickerAction::SetColor(hex) => self.set_color(hex),
            PickerAction::HuePointer { y, length } => {
                self.apply_hue_pointer(y, length);
                Ok(())
            }
            PickerAction::PalettePointer {
                x,
                y,
                width,
                height,
            } => {
                self.apply_palette_pointer(x, y, width, height);
                Ok(())
            }
        }
    }

    /// Sets the color from exactly six hex digits (no `#`), either case.
    ///
    /// The base hue follows the new color. Malformed input leaves the picker
    /// untouched and does not notify the observer.
    pub fn set_color(&mut self, hex: &str) -> Result<(), ColorError> {
        let rgb = match parse::parse_hex_digits(hex) {
            Ok(rgb) => rgb,
            Err(err) => {
                debug!("ignoring color {}: {}", hex, err);
                return Err(err);
            }
        };

        self.color = PickedColor::from_rgb(rgb);
        self.base_hue = self.color.hue();
        self.notify();
        Ok(())
    }

    /// Picks a hue from a pointer `y` pixels along a hue bar of `length`.
    ///
    /// The bar length is remembered for [`display_positions`](Self::display_positions).
    /// With [`HueSelection::JumpToBase`] the color becomes the pure base
    /// color; with [`HueSelection::PreserveShade`] saturation and value stay.
    pub fn apply_hue_pointer(&mut self, y: f32, length: f32) -> &PickedColor {
        self.config.hue_bar = self.config.hue_bar.resized(length);
        self.base_hue = self.config.hue_bar.hue_at(y);

        self.color = match self.config.hue_selection {
            HueSelection::JumpToBase => PickedColor::from_hsv(self.base_hue, 1.0, 1.0),
            HueSelection::PreserveShade => PickedColor::from_hsv(
                self.base_hue,
                self.color.saturation(),
                self.color.value(),
            ),
        };

        trace!("hue {} -> {}", self.base_hue, self.color.hex().as_str());
        self.notify();
        &self.color
    }

    /// Picks saturation and value from a pointer at `(x, y)` on a palette of
    /// `width` by `height`, keeping the current base hue.
    ///
    /// The palette size is remembered for [`display_positions`](Self::display_positions).
    pub fn apply_palette_pointer(&mut self, x: f32, y: f32, width: f32, height: f32) -> &PickedColor {
        self.config.palette = self.config.palette.resized(width, height);
        let (saturation, value) = self.config.palette.saturation_value_at(x, y);
        self.color = PickedColor::from_hsv(self.base_hue, saturation, value);

        trace!("palette s={} v={} -> {}", saturation, value, self.color.hex().as_str());
        self.notify();
        &self.color
    }

    /// Updates the palette geometry without changing the color.
    pub fn set_palette_region(&mut self, palette: PaletteRegion) {
        self.config.palette = palette;
    }

    /// Updates the hue bar geometry without changing the color.
    pub fn set_hue_bar_region(&mut self, hue_bar: HueBarRegion) {
        self.config.hue_bar = hue_bar;
    }

    /// Where the UI layer should draw the hue and palette indicators.
    ///
    /// The hue indicator follows the base hue, so it does not jump to the
    /// top of the bar when the color becomes a gray.
    pub fn display_positions(&self) -> DisplayPositions {
        DisplayPositions {
            hue: self.config.hue_bar.cursor_position(self.base_hue),
            palette: self
                .config
                .palette
                .cursor_position(self.color.saturation(), self.color.value()),
        }
    }

    /// Canonical six-digit hex of the selected color.
    #[inline]
    pub fn hex(&self) -> &HexColor {
        self.color.hex()
    }

    /// Returns the selected color.
    #[inline]
    pub fn color(&self) -> &PickedColor {
        &self.color
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.color.rgb()
    }

    #[inline]
    pub fn hsv(&self) -> HsvColor {
        self.color.hsv()
    }

    /// Hue anchoring the palette, in degrees.
    #[inline]
    pub fn base_hue(&self) -> f32 {
        self.base_hue
    }

    /// The palette tint: the base hue at full saturation and value.
    #[inline]
    pub fn base_color(&self) -> Rgb {
        colors::base_color(self.base_hue)
    }

    /// Returns the current configuration, including the last seen geometry.
    #[inline]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_change(&self.color);
        }
    }
}

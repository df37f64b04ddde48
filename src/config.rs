//! Picker layout and behavior configuration.

use crate::surface::{HueBarRegion, PaletteRegion};

/// What a hue bar interaction does to the saturation and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HueSelection {
    /// Jump to the pure base color of the picked hue (saturation and value 1).
    #[default]
    JumpToBase,

    /// Keep the current saturation and value, change only the hue.
    PreserveShade,
}

/// Picker configuration: surface geometry plus hue bar behavior.
///
/// The defaults describe the reference widget, a 199x199 palette with a
/// 7 px indicator and a 199 px hue bar with a 5 px indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PickerConfig {
    pub palette: PaletteRegion,
    pub hue_bar: HueBarRegion,
    pub hue_selection: HueSelection,
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(mut self, palette: PaletteRegion) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_hue_bar(mut self, hue_bar: HueBarRegion) -> Self {
        self.hue_bar = hue_bar;
        self
    }

    pub fn with_hue_selection(mut self, hue_selection: HueSelection) -> Self {
        self.hue_selection = hue_selection;
        self
    }
}

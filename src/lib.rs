#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`colors`**: Pure conversions between RGB, HSV and hex
//! - **`parse`**: Hex (`RRGGBB`, `#RRGGBB`) and `rgb(r, g, b)` text parsing
//! - **`surface`**: Pointer position to HSV mapping for the palette and hue bar, and back
//! - **`ColorPicker`**: Holds the selected color and base hue, applies pointer commands
//! - **`OnChange`**: Single observer notified after every successful command
//! - **`PickedColor`**: The selected color, with mutually consistent HSV/RGB/hex views
//! - **`PickerConfig`**: Surface geometry, indicator margins and hue bar behavior
//! - **`PickerAction`**: Commands that can be dispatched to a picker
//!
//! RGB is `Srgb<u8>` from palette. HSV is palette's `Hsv` with hue in degrees
//! and saturation/value in 0.0-1.0.

// Re-export the palette color types for user convenience
pub use palette::{Hsv, Srgb};

mod fmt;

pub mod colors;
pub mod command;
pub mod config;
pub mod parse;
pub mod picker;
pub mod surface;
pub mod types;

pub use colors::{
    base_color, hex_to_rgb, hsv_components_to_rgb, hsv_percent_to_rgb, hsv_to_rgb, rgb_channels_to_hsv,
    rgb_to_hex, rgb_to_hsv,
};
pub use command::PickerAction;
pub use config::{HueSelection, PickerConfig};
pub use parse::{parse_color, parse_rgb_function};
pub use picker::{ColorPicker, DisplayPositions, OnChange, PlainObserver};
pub use surface::{
    HueBarRegion, PaletteRegion, hue_bar_position_to_hue, hue_to_hue_bar_position,
    palette_to_saturation_value, saturation_value_to_palette,
};
pub use types::{ColorError, HexColor, HsvColor, PickedColor, Rgb};

/// Hex of a freshly constructed picker.
pub const DEFAULT_HEX: &str = "000000";

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

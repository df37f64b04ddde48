//! Command-based control for pickers.

/// Actions the UI layer forwards to a picker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PickerAction<'a> {
    /// Set the color from six hex digits.
    SetColor(&'a str),
    /// Pointer on the hue bar, `y` pixels along a bar of `length`.
    HuePointer { y: f32, length: f32 },
    /// Pointer on the palette at `(x, y)` within `width` by `height`.
    PalettePointer {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

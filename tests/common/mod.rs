//! Shared test infrastructure for hsv-picker integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hsv_picker::{HexColor, OnChange, PickedColor, Rgb};

// ============================================================================
// Mock Observer
// ============================================================================

/// Observer that records every color it is notified with
pub struct RecordingObserver {
    history: heapless::Vec<HexColor, 32>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.history.len()
    }

    pub fn last_hex(&self) -> Option<&str> {
        self.history.last().map(HexColor::as_str)
    }

    pub fn history(&self) -> &[HexColor] {
        &self.history
    }
}

impl OnChange for RecordingObserver {
    fn on_change(&mut self, color: &PickedColor) {
        let _ = self.history.push(color.hex().clone());
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use hsv_picker::{BLACK, BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Largest per-channel difference between two colors
pub fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    a.red
        .abs_diff(b.red)
        .max(a.green.abs_diff(b.green))
        .max(a.blue.abs_diff(b.blue))
}

/// Channel values sampled across the full 0-255 range, ends included
pub fn channel_samples() -> impl Iterator<Item = u8> + Clone {
    (0..=255u8).step_by(5)
}

/// Every RGB triple built from `channel_samples`
pub fn rgb_grid() -> impl Iterator<Item = Rgb> {
    channel_samples().flat_map(|r| {
        channel_samples().flat_map(move |g| channel_samples().map(move |b| Rgb::new(r, g, b)))
    })
}

/// Every channel value on one axis, crossed with sampled values on the others
pub fn rgb_axis_sweep() -> impl Iterator<Item = Rgb> {
    (0..=255u8).flat_map(|full| {
        channel_samples().flat_map(move |a| {
            channel_samples().flat_map(move |b| {
                [
                    Rgb::new(full, a, b),
                    Rgb::new(a, full, b),
                    Rgb::new(a, b, full),
                ]
            })
        })
    })
}

/// The whole RGB cube
pub fn rgb_cube() -> impl Iterator<Item = Rgb> {
    (0..=255u8).flat_map(|r| {
        (0..=255u8).flat_map(move |g| (0..=255u8).map(move |b| Rgb::new(r, g, b)))
    })
}

/// Compare two floats with tolerance
pub fn approx_eq(a: f32, b: f32) -> bool {
    const EPSILON: f32 = 0.001;
    (a - b).abs() < EPSILON
}

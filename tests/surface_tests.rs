//! Integration tests for surface mapping

mod common;
use common::*;

use hsv_picker::surface::{self, HUE_CURSOR_MARGIN, PALETTE_CURSOR_MARGIN};
use hsv_picker::{HueBarRegion, PaletteRegion};

#[test]
fn hue_bar_end_never_reports_360() {
    for length in [1.0f32, 7.5, 100.0, 199.0, 200.0, 1024.0] {
        assert_eq!(surface::hue_bar_position_to_hue(length, length), 359.0);
    }
}

#[test]
fn hue_bar_is_linear_inside_region() {
    assert_eq!(surface::hue_bar_position_to_hue(0.0, 360.0), 0.0);
    assert_eq!(surface::hue_bar_position_to_hue(90.0, 360.0), 90.0);
    assert_eq!(surface::hue_bar_position_to_hue(50.0, 200.0), 90.0);
    assert_eq!(surface::hue_bar_position_to_hue(150.0, 200.0), 270.0);
}

#[test]
fn hue_bar_clamps_drag_outside_region() {
    assert_eq!(surface::hue_bar_position_to_hue(-300.0, 200.0), 0.0);
    assert_eq!(surface::hue_bar_position_to_hue(f32::INFINITY, 200.0), 359.0);
}

#[test]
fn hue_position_inverse() {
    for hue in [0.0f32, 45.0, 90.0, 180.0, 270.0] {
        let y = surface::hue_to_hue_bar_position(hue, 200.0);
        assert!(approx_eq(surface::hue_bar_position_to_hue(y, 200.0), hue));
    }
}

#[test]
fn palette_corners() {
    let (w, h) = (200.0, 200.0);
    assert_eq!(surface::palette_to_saturation_value(0.0, 0.0, w, h), (0.0, 1.0));
    assert_eq!(surface::palette_to_saturation_value(w, 0.0, w, h), (1.0, 1.0));
    assert_eq!(surface::palette_to_saturation_value(0.0, h, w, h), (0.0, 0.0));
    assert_eq!(surface::palette_to_saturation_value(w, h, w, h), (1.0, 0.0));
}

#[test]
fn palette_clamps_drag_outside_region() {
    assert_eq!(
        surface::palette_to_saturation_value(-10.0, -10.0, 200.0, 100.0),
        (0.0, 1.0)
    );
    assert_eq!(
        surface::palette_to_saturation_value(250.0, 180.0, 200.0, 100.0),
        (1.0, 0.0)
    );
}

#[test]
fn palette_cursor_positions() {
    assert_eq!(
        surface::saturation_value_to_palette(0.0, 1.0, 200.0, 200.0, PALETTE_CURSOR_MARGIN),
        (0.0, 0.0)
    );
    assert_eq!(
        surface::saturation_value_to_palette(1.0, 0.0, 200.0, 200.0, PALETTE_CURSOR_MARGIN),
        (200.0 - PALETTE_CURSOR_MARGIN, 200.0 - PALETTE_CURSOR_MARGIN)
    );
    assert_eq!(
        surface::saturation_value_to_palette(0.25, 0.75, 200.0, 100.0, 0.0),
        (50.0, 25.0)
    );
}

#[test]
fn configurable_margin() {
    let palette = PaletteRegion::new(200.0, 200.0).with_cursor_margin(10.0);
    assert_eq!(palette.cursor_position(1.0, 0.0), (190.0, 190.0));

    let bar = HueBarRegion::new(360.0).with_cursor_margin(20.0);
    assert_eq!(bar.cursor_position(359.0), 340.0);
    assert_eq!(HueBarRegion::new(360.0).cursor_position(359.0), 360.0 - HUE_CURSOR_MARGIN);
}

#[test]
fn region_methods_match_free_functions() {
    let palette = PaletteRegion::new(320.0, 240.0);
    assert_eq!(
        palette.saturation_value_at(80.0, 60.0),
        surface::palette_to_saturation_value(80.0, 60.0, 320.0, 240.0)
    );

    let bar = HueBarRegion::new(240.0);
    assert_eq!(bar.hue_at(120.0), surface::hue_bar_position_to_hue(120.0, 240.0));
}

#[test]
fn degenerate_regions_report_zero() {
    let flat = PaletteRegion::new(0.0, 0.0);
    assert_eq!(flat.saturation_value_at(40.0, 40.0), (0.0, 1.0));
    assert_eq!(flat.cursor_position(1.0, 0.0), (0.0, 0.0));

    let empty = HueBarRegion::new(-1.0);
    assert_eq!(empty.hue_at(40.0), 0.0);
    assert_eq!(empty.cursor_position(180.0), 0.0);
}

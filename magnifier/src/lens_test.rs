#![allow(clippy::float_cmp)]

use super::*;

fn vp() -> Size {
    Size::new(1280.0, 720.0)
}

// --- crop ---

#[test]
fn crop_scales_zoom_to_percent() {
    let c = crop(FocusPercent::CENTER, 6.0);
    assert_eq!(c.background_size, 600.0);
}

#[test]
fn crop_position_is_focus_percent() {
    let c = crop(FocusPercent::new(12.5, 87.5), 5.0);
    assert_eq!(c.x, 12.5);
    assert_eq!(c.y, 87.5);
}

#[test]
fn crop_clamps_zoom_low() {
    let c = crop(FocusPercent::CENTER, 0.25);
    assert_eq!(c.background_size, 100.0);
}

#[test]
fn crop_clamps_zoom_high() {
    let c = crop(FocusPercent::CENTER, 99.0);
    assert_eq!(c.background_size, 1000.0);
}

// --- preview_crop ---

#[test]
fn preview_uses_fixed_low_zoom() {
    let c = preview_crop(FocusPercent::CENTER);
    assert_eq!(c.background_size, PREVIEW_ZOOM * 100.0);
}

#[test]
fn preview_follows_focus() {
    let c = preview_crop(FocusPercent::new(30.0, 70.0));
    assert_eq!(c.x, 30.0);
    assert_eq!(c.y, 70.0);
}

// --- place_lens: centering ---

#[test]
fn lens_centers_on_pointer() {
    let p = place_lens(Point::new(640.0, 360.0), 180.0, vp());
    assert_eq!(p.left, 550.0);
    assert_eq!(p.top, 270.0);
    assert_eq!(p.size, 180.0);
}

// --- place_lens: clamping ---

#[test]
fn lens_clamps_at_left_edge() {
    let p = place_lens(Point::new(10.0, 360.0), 180.0, vp());
    assert_eq!(p.left, 0.0);
}

#[test]
fn lens_clamps_at_top_edge() {
    let p = place_lens(Point::new(640.0, 5.0), 180.0, vp());
    assert_eq!(p.top, 0.0);
}

#[test]
fn lens_clamps_at_right_edge() {
    let p = place_lens(Point::new(1275.0, 360.0), 180.0, vp());
    assert_eq!(p.left, 1280.0 - 180.0);
}

#[test]
fn lens_clamps_at_bottom_edge() {
    let p = place_lens(Point::new(640.0, 719.0), 180.0, vp());
    assert_eq!(p.top, 720.0 - 180.0);
}

#[test]
fn lens_axes_clamp_independently() {
    let p = place_lens(Point::new(-50.0, 719.0), 180.0, vp());
    assert_eq!(p.left, 0.0);
    assert_eq!(p.top, 720.0 - 180.0);
}

#[test]
fn lens_box_always_inside_viewport() {
    let samples = [
        Point::new(-1000.0, -1000.0),
        Point::new(0.0, 0.0),
        Point::new(640.0, 360.0),
        Point::new(5000.0, 5000.0),
        Point::new(1280.0, 0.0),
    ];
    for pointer in samples {
        let p = place_lens(pointer, 180.0, vp());
        assert!(p.left >= 0.0);
        assert!(p.top >= 0.0);
        assert!(p.left + p.size <= 1280.0);
        assert!(p.top + p.size <= 720.0);
    }
}

// --- place_lens: degenerate sizes ---

#[test]
fn lens_larger_than_viewport_pins_to_origin() {
    let p = place_lens(Point::new(640.0, 360.0), 2000.0, vp());
    assert_eq!(p.left, 0.0);
    assert_eq!(p.top, 0.0);
}

#[test]
fn negative_lens_size_is_treated_as_zero() {
    let p = place_lens(Point::new(640.0, 360.0), -10.0, vp());
    assert_eq!(p.size, 0.0);
    assert_eq!(p.left, 640.0);
    assert_eq!(p.top, 360.0);
}

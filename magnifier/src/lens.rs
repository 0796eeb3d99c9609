//! Lens and preview crop computation.
//!
//! The zoomed crop is expressed as CSS background parameters: the image is
//! scaled to `zoom * 100%` of its box and positioned so the focus percent
//! sits under the lens center. The lens box itself is centered on the
//! pointer and clamped per axis so it never leaves the viewport.

#[cfg(test)]
#[path = "lens_test.rs"]
mod lens_test;

use crate::consts::{PREVIEW_ZOOM, ZOOM_MAX, ZOOM_MIN};
use crate::coords::FocusPercent;
use crate::geometry::{Point, Size};

/// CSS background-crop parameters for a magnified view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropStyle {
    /// `background-size` as a percentage of the element box.
    pub background_size: f64,
    /// `background-position-x` percentage.
    pub x: f64,
    /// `background-position-y` percentage.
    pub y: f64,
}

/// Screen placement of the floating lens, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensPlacement {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

/// Crop parameters for the main lens at the given zoom level.
#[must_use]
pub fn crop(focus: FocusPercent, zoom: f64) -> CropStyle {
    CropStyle {
        background_size: zoom.clamp(ZOOM_MIN, ZOOM_MAX) * 100.0,
        x: focus.x,
        y: focus.y,
    }
}

/// Crop parameters for the persistent low-zoom preview indicator.
#[must_use]
pub fn preview_crop(focus: FocusPercent) -> CropStyle {
    crop(focus, PREVIEW_ZOOM)
}

/// Center a square lens of `lens_size` on `pointer`, clamped so its
/// bounding box stays inside the viewport on each axis independently.
#[must_use]
pub fn place_lens(pointer: Point, lens_size: f64, viewport: Size) -> LensPlacement {
    let size = lens_size.max(0.0);
    let left = clamp_axis(pointer.x - size / 2.0, size, viewport.width);
    let top = clamp_axis(pointer.y - size / 2.0, size, viewport.height);
    LensPlacement { left, top, size }
}

fn clamp_axis(offset: f64, size: f64, extent: f64) -> f64 {
    // A lens larger than the viewport pins to the near edge.
    let max_offset = (extent - size).max(0.0);
    offset.clamp(0.0, max_offset)
}

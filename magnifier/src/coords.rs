//! Mapping pointer positions into normalized image-space percentages.
//!
//! The lens crop is driven by a percentage pair, so every pointer or touch
//! coordinate ends up here: translate into the container's local space,
//! clamp to the container bounds, then normalize to `[0, 100]` per axis.
//! Clamping before normalizing is what keeps a fast drag that overshoots
//! the container edge from sampling outside the source image.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use crate::geometry::{Point, Rect};

/// A normalized image-space coordinate, each axis in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusPercent {
    pub x: f64,
    pub y: f64,
}

impl FocusPercent {
    /// The image center.
    pub const CENTER: FocusPercent = FocusPercent { x: 50.0, y: 50.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x: x.clamp(0.0, 100.0), y: y.clamp(0.0, 100.0) }
    }
}

impl Default for FocusPercent {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Stateful screen-to-image-percent mapper.
///
/// Carries the last successfully computed focus so a query against a
/// zero-size container (element not yet laid out) degrades to the previous
/// value instead of dividing by zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateMapper {
    last_good: FocusPercent,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a viewport-space point to normalized image percentages.
    #[must_use]
    pub fn to_normalized(&mut self, viewport_pt: Point, rect: Rect) -> FocusPercent {
        self.normalize_local(rect.to_local(viewport_pt), rect)
    }

    /// Map a container-local point to normalized image percentages.
    ///
    /// The point is clamped to the container bounds first; a degenerate
    /// rect returns the last-known-good focus.
    #[must_use]
    pub fn normalize_local(&mut self, local_pt: Point, rect: Rect) -> FocusPercent {
        if rect.is_empty() {
            return self.last_good;
        }
        let clamped = rect.clamp_local(local_pt);
        let focus = FocusPercent::new(
            clamped.x / rect.width * 100.0,
            clamped.y / rect.height * 100.0,
        );
        self.last_good = focus;
        focus
    }

    /// The most recently computed focus.
    #[must_use]
    pub fn last_good(&self) -> FocusPercent {
        self.last_good
    }

    /// Forget prior state, returning to the image center.
    pub fn reset(&mut self) {
        self.last_good = FocusPercent::CENTER;
    }
}

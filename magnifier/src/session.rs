//! Per-overlay viewer session state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::consts::{DESKTOP_ZOOM_DEFAULT, ZOOM_MIN};
use crate::coords::FocusPercent;
use crate::geometry::Rect;
use crate::smoothing::Follower;

/// Which input family drives this session.
///
/// Desktop selects discrete zoom levels (keyboard, buttons); touch zooms
/// continuously via pinch. The two ranges are intentionally distinct
/// per-platform defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Desktop,
    Touch,
}

impl Platform {
    /// Zoom level a fresh session opens at.
    #[must_use]
    pub fn initial_zoom(self) -> f64 {
        match self {
            Platform::Desktop => DESKTOP_ZOOM_DEFAULT,
            Platform::Touch => ZOOM_MIN,
        }
    }
}

/// State for one open overlay instance.
///
/// Created when the overlay opens and reset whenever `is_open` goes false,
/// including abnormal teardown, so nothing leaks across opens.
#[derive(Debug, Clone, Copy)]
pub struct ViewerSession {
    /// Lifecycle flag.
    pub is_open: bool,
    /// Current zoom level in `[ZOOM_MIN, ZOOM_MAX]`.
    pub zoom_level: f64,
    /// Smoothed lens position chasing the raw pointer, container-local px.
    pub follower: Follower,
    /// Normalized image-space focus driving the crop.
    pub focus_percent: FocusPercent,
    /// Container bounds cached at gesture start; never re-queried
    /// mid-gesture.
    pub container_rect: Option<Rect>,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self {
            is_open: false,
            zoom_level: ZOOM_MIN,
            follower: Follower::default(),
            focus_percent: FocusPercent::CENTER,
            container_rect: None,
        }
    }
}

impl ViewerSession {
    /// Begin a session at the platform's initial zoom, optionally focused
    /// on a caller-provided point.
    pub fn open(&mut self, platform: Platform, initial_focus: Option<FocusPercent>) {
        *self = Self {
            is_open: true,
            zoom_level: platform.initial_zoom(),
            focus_percent: initial_focus.unwrap_or(FocusPercent::CENTER),
            ..Self::default()
        };
    }

    /// Destroy the session state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

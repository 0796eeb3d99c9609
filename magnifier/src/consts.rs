//! Shared numeric constants for the magnifier crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Lowest zoom level reachable on any platform.
pub const ZOOM_MIN: f64 = 1.0;

/// Highest zoom level reachable on any platform.
pub const ZOOM_MAX: f64 = 10.0;

/// Lowest discrete zoom level selectable on desktop.
pub const DESKTOP_ZOOM_MIN: f64 = 5.0;

/// Highest discrete zoom level selectable on desktop.
pub const DESKTOP_ZOOM_MAX: f64 = 10.0;

/// Zoom level a desktop session opens at.
pub const DESKTOP_ZOOM_DEFAULT: f64 = 5.0;

// ── Smoothing ───────────────────────────────────────────────────

/// Per-frame interpolation factor for lens motion, in (0, 1).
/// Higher is snappier, lower trails the pointer more.
pub const SMOOTHING_FACTOR: f64 = 0.2;

/// Distance in pixels under which the smoothed position counts as settled
/// on its target.
pub const SETTLE_EPSILON_PX: f64 = 0.5;

// ── Lens / preview ──────────────────────────────────────────────

/// Edge length of the square floating lens, in CSS pixels.
pub const LENS_SIZE_PX: f64 = 180.0;

/// Fixed zoom level of the persistent preview indicator.
pub const PREVIEW_ZOOM: f64 = 2.0;

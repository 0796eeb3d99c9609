#![allow(clippy::float_cmp)]

use super::*;

// --- Platform ---

#[test]
fn desktop_opens_at_discrete_default() {
    assert_eq!(Platform::Desktop.initial_zoom(), DESKTOP_ZOOM_DEFAULT);
}

#[test]
fn touch_opens_at_minimum_zoom() {
    assert_eq!(Platform::Touch.initial_zoom(), ZOOM_MIN);
}

// --- Defaults ---

#[test]
fn default_session_is_closed() {
    let s = ViewerSession::default();
    assert!(!s.is_open);
    assert_eq!(s.zoom_level, ZOOM_MIN);
    assert_eq!(s.focus_percent, FocusPercent::CENTER);
    assert!(s.container_rect.is_none());
}

// --- open ---

#[test]
fn open_sets_lifecycle_flag() {
    let mut s = ViewerSession::default();
    s.open(Platform::Desktop, None);
    assert!(s.is_open);
}

#[test]
fn open_uses_platform_zoom() {
    let mut s = ViewerSession::default();
    s.open(Platform::Desktop, None);
    assert_eq!(s.zoom_level, DESKTOP_ZOOM_DEFAULT);
    s.reset();
    s.open(Platform::Touch, None);
    assert_eq!(s.zoom_level, ZOOM_MIN);
}

#[test]
fn open_defaults_focus_to_center() {
    let mut s = ViewerSession::default();
    s.open(Platform::Touch, None);
    assert_eq!(s.focus_percent, FocusPercent::CENTER);
}

#[test]
fn open_honors_initial_focus() {
    let mut s = ViewerSession::default();
    s.open(Platform::Desktop, Some(FocusPercent::new(10.0, 90.0)));
    assert_eq!(s.focus_percent, FocusPercent::new(10.0, 90.0));
}

#[test]
fn open_discards_prior_session_state() {
    let mut s = ViewerSession::default();
    s.open(Platform::Desktop, None);
    s.zoom_level = 9.0;
    s.container_rect = Some(crate::geometry::Rect::new(0.0, 0.0, 10.0, 10.0));
    s.open(Platform::Desktop, None);
    assert_eq!(s.zoom_level, DESKTOP_ZOOM_DEFAULT);
    assert!(s.container_rect.is_none());
}

// --- reset ---

#[test]
fn reset_restores_defaults() {
    let mut s = ViewerSession::default();
    s.open(Platform::Desktop, Some(FocusPercent::new(1.0, 2.0)));
    s.zoom_level = 8.0;
    s.reset();
    assert!(!s.is_open);
    assert_eq!(s.zoom_level, ZOOM_MIN);
    assert_eq!(s.focus_percent, FocusPercent::CENTER);
    assert!(s.container_rect.is_none());
}

//! Viewer engine: composes the session, gesture classifier, mapper, and
//! smoothing into the open → interact → close lifecycle.
//!
//! All methods are pure state transitions returning [`Action`]s for the
//! host to apply (start/stop the frame loop, lock/unlock scrolling, notify
//! listeners). The engine never touches the DOM, which keeps the full
//! lifecycle testable without a browser.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::consts::{DESKTOP_ZOOM_MAX, DESKTOP_ZOOM_MIN, LENS_SIZE_PX, ZOOM_MAX, ZOOM_MIN};
use crate::coords::{CoordinateMapper, FocusPercent};
use crate::events::{EventKind, ViewerEvent};
use crate::gesture::{Gesture, GestureClassifier, GestureState, Key};
use crate::geometry::{Point, Rect, Size};
use crate::lens::{self, CropStyle, LensPlacement};
use crate::session::{Platform, ViewerSession};

/// Effects returned from engine handlers for the host to process, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Visible state changed; re-read the engine and update the view.
    RenderNeeded,
    /// Begin scheduling animation frames (no-op if already running).
    StartAnimation,
    /// Cancel any pending animation frame synchronously.
    StopAnimation,
    /// Acquire the document scroll lock.
    LockScroll,
    /// Release the document scroll lock.
    UnlockScroll,
    /// Forward to output callbacks and the engagement log.
    Notify(ViewerEvent),
}

/// The magnifier engine.
#[derive(Debug, Clone, Default)]
pub struct ViewerCore {
    session: ViewerSession,
    classifier: GestureClassifier,
    mapper: CoordinateMapper,
}

impl ViewerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Lifecycle ---

    /// Open the overlay. Idempotent: opening an open viewer is a no-op.
    pub fn open(&mut self, platform: Platform, initial_focus: Option<FocusPercent>) -> Vec<Action> {
        if self.session.is_open {
            return Vec::new();
        }
        self.session.open(platform, initial_focus);
        vec![
            Action::LockScroll,
            Action::RenderNeeded,
            Action::Notify(ViewerEvent::new(EventKind::Opened)),
        ]
    }

    /// Close the overlay from any open state.
    ///
    /// Cancels the animation loop and releases the scroll lock before the
    /// session flips closed; safe to call redundantly and from teardown.
    pub fn close(&mut self) -> Vec<Action> {
        if !self.session.is_open {
            return Vec::new();
        }
        self.classifier.reset();
        self.mapper.reset();
        self.session.reset();
        vec![
            Action::StopAnimation,
            Action::UnlockScroll,
            Action::RenderNeeded,
            Action::Notify(ViewerEvent::new(EventKind::Closed)),
        ]
    }

    // --- Desktop pointer input ---

    /// Pointer pressed at a viewport coordinate. `rect` is the container's
    /// bounding rect, read once here and cached for the whole gesture.
    pub fn pointer_down(&mut self, viewport_pt: Point, rect: Rect) -> Vec<Action> {
        if !self.session.is_open {
            return Vec::new();
        }
        if !self.classifier.is_interacting() {
            self.session.container_rect = Some(rect);
        }
        let local = rect.to_local(viewport_pt);
        let gestures = self.classifier.pointer_down(local);
        self.drain(gestures)
    }

    pub fn pointer_move(&mut self, viewport_pt: Point) -> Vec<Action> {
        let Some(rect) = self.session.container_rect else {
            return Vec::new();
        };
        let local = rect.to_local(viewport_pt);
        let gestures = self.classifier.pointer_move(local);
        self.drain(gestures)
    }

    pub fn pointer_up(&mut self) -> Vec<Action> {
        let gestures = self.classifier.pointer_up();
        self.drain(gestures)
    }

    // --- Touch input ---

    /// Fingers landed. `points` is the full set of active touches in
    /// viewport coordinates; `rect` is cached only at gesture start.
    pub fn touch_start(&mut self, points: &[Point], rect: Rect) -> Vec<Action> {
        if !self.session.is_open {
            return Vec::new();
        }
        if !self.classifier.is_interacting() {
            self.session.container_rect = Some(rect);
        }
        let local = self.to_local_all(points, rect);
        let gestures = self.classifier.touch_start(&local);
        self.drain(gestures)
    }

    pub fn touch_move(&mut self, points: &[Point]) -> Vec<Action> {
        let Some(rect) = self.session.container_rect else {
            return Vec::new();
        };
        let local = self.to_local_all(points, rect);
        let gestures = self.classifier.touch_move(&local);
        self.drain(gestures)
    }

    /// Fingers lifted or the touch was cancelled; `remaining` is the set
    /// still down.
    pub fn touch_end(&mut self, remaining: &[Point]) -> Vec<Action> {
        let rect = self.session.container_rect.unwrap_or_default();
        let local = self.to_local_all(remaining, rect);
        let gestures = self.classifier.touch_end(&local);
        self.drain(gestures)
    }

    // --- Keyboard (desktop) ---

    /// Digits 5–9 select those zoom levels, 0 selects the top level,
    /// Escape closes.
    pub fn key_down(&mut self, key: &Key) -> Vec<Action> {
        if !self.session.is_open {
            return Vec::new();
        }
        match key.0.as_str() {
            "Escape" => self.close(),
            "0" => self.set_zoom(DESKTOP_ZOOM_MAX),
            digit => match digit.parse::<u8>() {
                Ok(n) if (DESKTOP_ZOOM_MIN..DESKTOP_ZOOM_MAX).contains(&f64::from(n)) => {
                    self.set_zoom(f64::from(n))
                }
                _ => Vec::new(),
            },
        }
    }

    /// Select a discrete desktop zoom level, clamped to the desktop range.
    pub fn set_zoom(&mut self, level: f64) -> Vec<Action> {
        if !self.session.is_open {
            return Vec::new();
        }
        let clamped = level.clamp(DESKTOP_ZOOM_MIN, DESKTOP_ZOOM_MAX).round();
        if (clamped - self.session.zoom_level).abs() < f64::EPSILON {
            return Vec::new();
        }
        self.session.zoom_level = clamped;
        vec![
            Action::RenderNeeded,
            Action::Notify(ViewerEvent::new(EventKind::ZoomChanged { level: clamped })),
        ]
    }

    // --- Animation frame ---

    /// Advance the smoothing loop one frame. Only this method moves the
    /// smoothed position; event handlers touch the target alone.
    pub fn tick(&mut self) -> Vec<Action> {
        if !self.session.is_open || !self.classifier.is_interacting() {
            return Vec::new();
        }
        self.session.follower.step();
        if let Some(rect) = self.session.container_rect {
            self.session.focus_percent =
                self.mapper.normalize_local(self.session.follower.current(), rect);
        }
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_open
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.session.is_open && self.classifier.is_interacting()
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.classifier.state()
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.session.zoom_level
    }

    #[must_use]
    pub fn focus(&self) -> FocusPercent {
        self.session.focus_percent
    }

    #[must_use]
    pub fn session(&self) -> &ViewerSession {
        &self.session
    }

    /// Crop parameters for the lens at the current focus and zoom.
    #[must_use]
    pub fn crop(&self) -> CropStyle {
        lens::crop(self.session.focus_percent, self.session.zoom_level)
    }

    /// Crop parameters for the persistent preview indicator.
    #[must_use]
    pub fn preview(&self) -> CropStyle {
        lens::preview_crop(self.session.focus_percent)
    }

    /// Smoothed lens center in viewport coordinates, while interacting.
    #[must_use]
    pub fn lens_center(&self) -> Option<Point> {
        if !self.is_interacting() {
            return None;
        }
        self.session
            .container_rect
            .map(|rect| rect.to_viewport(self.session.follower.current()))
    }

    /// Viewport-clamped placement of the floating lens, while interacting.
    #[must_use]
    pub fn lens_placement(&self, viewport: Size) -> Option<LensPlacement> {
        self.lens_center()
            .map(|center| lens::place_lens(center, LENS_SIZE_PX, viewport))
    }

    // --- Internal ---

    fn to_local_all(&self, points: &[Point], rect: Rect) -> Vec<Point> {
        points.iter().map(|p| rect.to_local(*p)).collect()
    }

    fn drain(&mut self, gestures: Vec<Gesture>) -> Vec<Action> {
        gestures
            .into_iter()
            .flat_map(|g| self.apply_gesture(g))
            .collect()
    }

    fn apply_gesture(&mut self, gesture: Gesture) -> Vec<Action> {
        match gesture {
            Gesture::DragStart(pt) => {
                self.session.follower.seed(pt);
                self.refocus(pt);
                vec![
                    Action::StartAnimation,
                    Action::RenderNeeded,
                    Action::Notify(ViewerEvent::new(EventKind::DragStarted)),
                ]
            }
            Gesture::DragMove(pt) => {
                self.session.follower.set_target(pt);
                Vec::new()
            }
            Gesture::DragEnd => vec![
                Action::StopAnimation,
                Action::RenderNeeded,
                Action::Notify(ViewerEvent::new(EventKind::DragEnded)),
            ],
            Gesture::PinchStart { center, .. } => {
                self.session.follower.seed(center);
                self.refocus(center);
                vec![
                    Action::StartAnimation,
                    Action::RenderNeeded,
                    Action::Notify(ViewerEvent::new(EventKind::PinchStarted)),
                ]
            }
            Gesture::PinchMove { center, ratio, .. } => {
                let level = (self.session.zoom_level * ratio).clamp(ZOOM_MIN, ZOOM_MAX);
                self.session.zoom_level = level;
                self.session.follower.set_target(center);
                vec![Action::RenderNeeded]
            }
            Gesture::PinchEnd => vec![
                Action::Notify(ViewerEvent::new(EventKind::PinchEnded)),
                Action::Notify(ViewerEvent::new(EventKind::ZoomChanged {
                    level: self.session.zoom_level,
                })),
            ],
        }
    }

    fn refocus(&mut self, local_pt: Point) {
        if let Some(rect) = self.session.container_rect {
            self.session.focus_percent = self.mapper.normalize_local(local_pt, rect);
        }
    }
}

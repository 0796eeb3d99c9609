//! Input model: keyboard keys, the touch session, and the gesture state
//! machine.
//!
//! Raw pointer/touch event sequences come in; a typed gesture stream comes
//! out. The classifier is a small explicit state machine so every 0/1/2+
//! touch-count transition is enumerable and testable, including the easy-to-
//! get-wrong ones (losing a finger mid-pinch, both fingers landing in the
//! same event). Positions passed in are container-local pixels; the engine
//! translates viewport coordinates before calling in.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geometry::Point;

/// A keyboard key as reported by the browser (e.g. `"Escape"`, `"5"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Ephemeral multi-touch bookkeeping. Lives only while at least one touch
/// point is active; zeroed when the last finger lifts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchSession {
    /// Number of active touch points.
    pub touch_count: usize,
    /// Inter-touch distance at the previous pinch sample; 0 when not
    /// pinching, so a new pinch never inherits a stale baseline.
    pub last_pinch_distance: f64,
    /// Midpoint of the two active touch points; the lens anchor while
    /// pinching.
    pub pinch_center: Point,
}

impl TouchSession {
    /// Whether two or more touch points are down.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.touch_count >= 2
    }
}

/// Which gesture the classifier is currently tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer/touch down.
    #[default]
    Idle,
    /// Desktop pointer drag between pointer-down and pointer-up.
    Dragging,
    /// Exactly one finger down; moves the lens like a drag.
    SingleTouch,
    /// Two or more fingers down; inter-touch distance drives zoom.
    Pinching,
}

/// A classified gesture event, emitted in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// A drag began at the given container-local point. Target and current
    /// positions must both be seeded here to avoid a visible snap.
    DragStart(Point),
    /// The drag target moved. Only the target position may change; the
    /// smoothed position is owned by the animation loop.
    DragMove(Point),
    /// The drag ended; the animation loop should wind down.
    DragEnd,
    /// A second finger landed; pinch tracking begins.
    PinchStart { center: Point, distance: f64 },
    /// Both fingers moved. `ratio` is the multiplicative zoom delta
    /// (`new_distance / previous_distance`), scale-invariant with respect
    /// to absolute finger spacing.
    PinchMove { center: Point, distance: f64, ratio: f64 },
    /// Fewer than two fingers remain; pinch tracking stops.
    PinchEnd,
}

/// The gesture state machine.
///
/// Desktop: `Idle → Dragging → Idle`.
/// Touch: `Idle → SingleTouch → Pinching → SingleTouch/Idle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GestureClassifier {
    state: GestureState,
    touch: TouchSession,
}

impl GestureClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn touch_session(&self) -> TouchSession {
        self.touch
    }

    /// Whether a drag or pinch is in flight (the animation loop should run).
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.state != GestureState::Idle
    }

    /// Abandon any in-flight gesture, e.g. on overlay close.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.touch = TouchSession::default();
    }

    // --- Desktop pointer path ---

    pub fn pointer_down(&mut self, local_pt: Point) -> Vec<Gesture> {
        if self.state != GestureState::Idle {
            return Vec::new();
        }
        self.state = GestureState::Dragging;
        vec![Gesture::DragStart(local_pt)]
    }

    pub fn pointer_move(&mut self, local_pt: Point) -> Vec<Gesture> {
        if self.state != GestureState::Dragging {
            return Vec::new();
        }
        vec![Gesture::DragMove(local_pt)]
    }

    pub fn pointer_up(&mut self) -> Vec<Gesture> {
        if self.state != GestureState::Dragging {
            return Vec::new();
        }
        self.state = GestureState::Idle;
        vec![Gesture::DragEnd]
    }

    // --- Touch path ---

    /// One or more fingers landed. `points` is the full set of active
    /// touch points after the event.
    pub fn touch_start(&mut self, points: &[Point]) -> Vec<Gesture> {
        self.touch.touch_count = points.len();
        match (self.state, points) {
            (GestureState::Idle, [only]) => {
                self.state = GestureState::SingleTouch;
                vec![Gesture::DragStart(*only)]
            }
            // Both fingers can land within one event when the browser
            // coalesces; enter the pinch directly.
            (GestureState::Idle | GestureState::SingleTouch, [a, b, ..]) => {
                let started = self.begin_pinch(*a, *b);
                self.state = GestureState::Pinching;
                vec![started]
            }
            // Third and later fingers keep the existing two-finger baseline.
            _ => Vec::new(),
        }
    }

    /// Active fingers moved.
    pub fn touch_move(&mut self, points: &[Point]) -> Vec<Gesture> {
        match (self.state, points) {
            (GestureState::SingleTouch, [only, ..]) => vec![Gesture::DragMove(*only)],
            (GestureState::Pinching, [a, b, ..]) => {
                let distance = a.distance_to(*b);
                let center = a.midpoint(*b);
                let ratio = if self.touch.last_pinch_distance > 0.0 {
                    distance / self.touch.last_pinch_distance
                } else {
                    1.0
                };
                self.touch.last_pinch_distance = distance;
                self.touch.pinch_center = center;
                vec![Gesture::PinchMove { center, distance, ratio }]
            }
            _ => Vec::new(),
        }
    }

    /// One or more fingers lifted (or the touch was cancelled).
    /// `remaining` is the set of touch points still active.
    pub fn touch_end(&mut self, remaining: &[Point]) -> Vec<Gesture> {
        self.touch.touch_count = remaining.len();
        match (self.state, remaining) {
            (GestureState::Pinching, [a, b, ..]) => {
                // Still two or more fingers: rebase the distance so the
                // next move does not see a jump from the departed finger.
                self.touch.last_pinch_distance = a.distance_to(*b);
                self.touch.pinch_center = a.midpoint(*b);
                Vec::new()
            }
            (GestureState::Pinching, [only]) => {
                self.state = GestureState::SingleTouch;
                self.touch.last_pinch_distance = 0.0;
                // The surviving finger continues as a drag; re-seed so the
                // lens does not snap to it.
                vec![Gesture::PinchEnd, Gesture::DragStart(*only)]
            }
            (GestureState::Pinching, []) => {
                self.state = GestureState::Idle;
                self.touch = TouchSession::default();
                vec![Gesture::PinchEnd, Gesture::DragEnd]
            }
            (GestureState::SingleTouch, []) => {
                self.state = GestureState::Idle;
                self.touch = TouchSession::default();
                vec![Gesture::DragEnd]
            }
            _ => Vec::new(),
        }
    }

    fn begin_pinch(&mut self, a: Point, b: Point) -> Gesture {
        let distance = a.distance_to(b);
        let center = a.midpoint(b);
        self.touch.last_pinch_distance = distance;
        self.touch.pinch_center = center;
        Gesture::PinchStart { center, distance }
    }
}

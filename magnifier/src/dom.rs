//! Conversions from browser event types into engine inputs.
//!
//! The only place in the crate that touches `web-sys`. The host UI wires
//! DOM events to the engine through these helpers so the engine itself
//! stays free of browser types.

use web_sys::{DomRect, MouseEvent, PointerEvent, TouchList};

use crate::geometry::{Point, Rect};
use crate::session::Platform;

/// Engine rect from a DOM bounding client rect.
#[must_use]
pub fn rect_from_dom(rect: &DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Viewport-space point of a pointer event.
#[must_use]
pub fn pointer_point(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Viewport-space point of a plain mouse event (e.g. gallery hover).
#[must_use]
pub fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

/// Viewport-space points of every touch in a `TouchList`, in list order.
#[must_use]
pub fn touch_points(touches: &TouchList) -> Vec<Point> {
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

/// Classify the device by its primary pointer. Coarse pointers (touch
/// screens) get the continuous pinch-zoom range; everything else gets the
/// discrete desktop levels. Outside a browser this answers `Desktop`.
#[must_use]
pub fn detect_platform() -> Platform {
    let coarse = web_sys::window()
        .and_then(|w| w.match_media("(pointer: coarse)").unwrap_or(None))
        .is_some_and(|mq| mq.matches());
    if coarse { Platform::Touch } else { Platform::Desktop }
}

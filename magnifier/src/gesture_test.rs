#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_equality() {
    assert_eq!(Key("5".into()), Key("5".into()));
    assert_ne!(Key("5".into()), Key("6".into()));
}

#[test]
fn key_stores_string() {
    let k = Key("Escape".into());
    assert_eq!(k.0, "Escape");
}

// =============================================================
// TouchSession
// =============================================================

#[test]
fn touch_session_default_is_empty() {
    let t = TouchSession::default();
    assert_eq!(t.touch_count, 0);
    assert_eq!(t.last_pinch_distance, 0.0);
    assert!(!t.is_multi_touch());
}

#[test]
fn touch_session_multi_touch_at_two() {
    let t = TouchSession { touch_count: 2, ..TouchSession::default() };
    assert!(t.is_multi_touch());
}

#[test]
fn touch_session_single_is_not_multi() {
    let t = TouchSession { touch_count: 1, ..TouchSession::default() };
    assert!(!t.is_multi_touch());
}

// =============================================================
// GestureState
// =============================================================

#[test]
fn classifier_default_is_idle() {
    let c = GestureClassifier::new();
    assert_eq!(c.state(), GestureState::Idle);
    assert!(!c.is_interacting());
}

// =============================================================
// Desktop pointer path
// =============================================================

#[test]
fn pointer_down_starts_drag() {
    let mut c = GestureClassifier::new();
    let g = c.pointer_down(pt(10.0, 20.0));
    assert_eq!(g, vec![Gesture::DragStart(pt(10.0, 20.0))]);
    assert_eq!(c.state(), GestureState::Dragging);
    assert!(c.is_interacting());
}

#[test]
fn second_pointer_down_is_ignored() {
    let mut c = GestureClassifier::new();
    c.pointer_down(pt(0.0, 0.0));
    assert!(c.pointer_down(pt(5.0, 5.0)).is_empty());
    assert_eq!(c.state(), GestureState::Dragging);
}

#[test]
fn pointer_move_while_dragging_emits_drag_move() {
    let mut c = GestureClassifier::new();
    c.pointer_down(pt(0.0, 0.0));
    let g = c.pointer_move(pt(30.0, 40.0));
    assert_eq!(g, vec![Gesture::DragMove(pt(30.0, 40.0))]);
}

#[test]
fn pointer_move_while_idle_is_ignored() {
    let mut c = GestureClassifier::new();
    assert!(c.pointer_move(pt(30.0, 40.0)).is_empty());
}

#[test]
fn pointer_up_ends_drag() {
    let mut c = GestureClassifier::new();
    c.pointer_down(pt(0.0, 0.0));
    let g = c.pointer_up();
    assert_eq!(g, vec![Gesture::DragEnd]);
    assert_eq!(c.state(), GestureState::Idle);
}

#[test]
fn pointer_up_while_idle_is_ignored() {
    let mut c = GestureClassifier::new();
    assert!(c.pointer_up().is_empty());
}

#[test]
fn full_drag_cycle_returns_to_idle() {
    let mut c = GestureClassifier::new();
    c.pointer_down(pt(1.0, 1.0));
    c.pointer_move(pt(2.0, 2.0));
    c.pointer_move(pt(3.0, 3.0));
    c.pointer_up();
    assert_eq!(c.state(), GestureState::Idle);
    assert!(!c.is_interacting());
}

// =============================================================
// Touch path: single finger
// =============================================================

#[test]
fn single_touch_start_begins_drag() {
    let mut c = GestureClassifier::new();
    let g = c.touch_start(&[pt(50.0, 60.0)]);
    assert_eq!(g, vec![Gesture::DragStart(pt(50.0, 60.0))]);
    assert_eq!(c.state(), GestureState::SingleTouch);
    assert_eq!(c.touch_session().touch_count, 1);
}

#[test]
fn single_touch_move_emits_drag_move() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0)]);
    let g = c.touch_move(&[pt(10.0, 10.0)]);
    assert_eq!(g, vec![Gesture::DragMove(pt(10.0, 10.0))]);
}

#[test]
fn single_touch_lift_ends_drag() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0)]);
    let g = c.touch_end(&[]);
    assert_eq!(g, vec![Gesture::DragEnd]);
    assert_eq!(c.state(), GestureState::Idle);
    assert_eq!(c.touch_session().touch_count, 0);
}

#[test]
fn touch_move_while_idle_is_ignored() {
    let mut c = GestureClassifier::new();
    assert!(c.touch_move(&[pt(10.0, 10.0)]).is_empty());
}

// =============================================================
// Touch path: pinch
// =============================================================

#[test]
fn second_finger_starts_pinch() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0)]);
    let g = c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    assert_eq!(
        g,
        vec![Gesture::PinchStart { center: pt(50.0, 0.0), distance: 100.0 }]
    );
    assert_eq!(c.state(), GestureState::Pinching);
    assert!(c.touch_session().is_multi_touch());
    assert!(approx_eq(c.touch_session().last_pinch_distance, 100.0));
}

#[test]
fn both_fingers_landing_at_once_start_pinch_from_idle() {
    let mut c = GestureClassifier::new();
    let g = c.touch_start(&[pt(0.0, 0.0), pt(60.0, 80.0)]);
    assert_eq!(
        g,
        vec![Gesture::PinchStart { center: pt(30.0, 40.0), distance: 100.0 }]
    );
    assert_eq!(c.state(), GestureState::Pinching);
}

#[test]
fn pinch_move_reports_distance_ratio() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    let g = c.touch_move(&[pt(0.0, 0.0), pt(200.0, 0.0)]);
    match g.as_slice() {
        [Gesture::PinchMove { center, distance, ratio }] => {
            assert_eq!(*center, pt(100.0, 0.0));
            assert!(approx_eq(*distance, 200.0));
            assert!(approx_eq(*ratio, 2.0));
        }
        other => panic!("unexpected gestures: {other:?}"),
    }
}

#[test]
fn pinch_ratio_is_relative_to_previous_sample() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.touch_move(&[pt(0.0, 0.0), pt(200.0, 0.0)]);
    let g = c.touch_move(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    match g.as_slice() {
        [Gesture::PinchMove { ratio, .. }] => assert!(approx_eq(*ratio, 0.5)),
        other => panic!("unexpected gestures: {other:?}"),
    }
}

#[test]
fn pinch_ratio_is_scale_invariant() {
    // Same relative spread from different absolute spacings → same ratio.
    let mut narrow = GestureClassifier::new();
    narrow.touch_start(&[pt(0.0, 0.0), pt(50.0, 0.0)]);
    let narrow_move = narrow.touch_move(&[pt(0.0, 0.0), pt(75.0, 0.0)]);

    let mut wide = GestureClassifier::new();
    wide.touch_start(&[pt(0.0, 0.0), pt(200.0, 0.0)]);
    let wide_move = wide.touch_move(&[pt(0.0, 0.0), pt(300.0, 0.0)]);

    let ratio_of = |g: &[Gesture]| match g {
        [Gesture::PinchMove { ratio, .. }] => *ratio,
        other => panic!("unexpected gestures: {other:?}"),
    };
    assert!(approx_eq(ratio_of(&narrow_move), ratio_of(&wide_move)));
}

#[test]
fn losing_one_finger_degrades_to_single_touch() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    let g = c.touch_end(&[pt(100.0, 0.0)]);
    assert_eq!(
        g,
        vec![Gesture::PinchEnd, Gesture::DragStart(pt(100.0, 0.0))]
    );
    assert_eq!(c.state(), GestureState::SingleTouch);
}

#[test]
fn pinch_baseline_resets_when_degrading() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.touch_end(&[pt(100.0, 0.0)]);
    assert_eq!(c.touch_session().last_pinch_distance, 0.0);
}

#[test]
fn next_pinch_does_not_inherit_stale_baseline() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(400.0, 0.0)]);
    c.touch_end(&[pt(400.0, 0.0)]);
    // Second pinch starts at a different spacing; its first move must be
    // measured against the new baseline, not the old 400px one.
    c.touch_start(&[pt(400.0, 0.0), pt(500.0, 0.0)]);
    let g = c.touch_move(&[pt(400.0, 0.0), pt(550.0, 0.0)]);
    match g.as_slice() {
        [Gesture::PinchMove { ratio, .. }] => assert!(approx_eq(*ratio, 1.5)),
        other => panic!("unexpected gestures: {other:?}"),
    }
}

#[test]
fn losing_both_fingers_ends_pinch_and_drag() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    let g = c.touch_end(&[]);
    assert_eq!(g, vec![Gesture::PinchEnd, Gesture::DragEnd]);
    assert_eq!(c.state(), GestureState::Idle);
    assert_eq!(c.touch_session().touch_count, 0);
}

#[test]
fn third_finger_keeps_two_finger_baseline() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    let g = c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0), pt(50.0, 90.0)]);
    assert!(g.is_empty());
    assert_eq!(c.state(), GestureState::Pinching);
    assert!(approx_eq(c.touch_session().last_pinch_distance, 100.0));
    assert_eq!(c.touch_session().touch_count, 3);
}

#[test]
fn losing_third_finger_rebases_distance() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0), pt(50.0, 90.0)]);
    let g = c.touch_end(&[pt(0.0, 0.0), pt(60.0, 80.0)]);
    assert!(g.is_empty());
    assert_eq!(c.state(), GestureState::Pinching);
    assert!(approx_eq(c.touch_session().last_pinch_distance, 100.0));
}

#[test]
fn pinch_center_tracks_midpoint() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.touch_move(&[pt(100.0, 100.0), pt(300.0, 100.0)]);
    assert_eq!(c.touch_session().pinch_center, pt(200.0, 100.0));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_abandons_drag() {
    let mut c = GestureClassifier::new();
    c.pointer_down(pt(0.0, 0.0));
    c.reset();
    assert_eq!(c.state(), GestureState::Idle);
    assert!(c.pointer_move(pt(5.0, 5.0)).is_empty());
}

#[test]
fn reset_abandons_pinch_and_touch_session() {
    let mut c = GestureClassifier::new();
    c.touch_start(&[pt(0.0, 0.0), pt(100.0, 0.0)]);
    c.reset();
    assert_eq!(c.state(), GestureState::Idle);
    assert_eq!(c.touch_session().touch_count, 0);
    assert_eq!(c.touch_session().last_pinch_distance, 0.0);
}

use approx::assert_relative_eq;

use cropdeck_core::consts::{MAX_ZOOM, MIN_ZOOM};
use cropdeck_core::viewport::{DragState, ViewportState};

#[test]
fn test_default_is_reset_state() {
    let v = ViewportState::default();
    assert_relative_eq!(v.zoom(), 1.0);
    assert_eq!(v.pan(), (0.0, 0.0));
    assert_eq!(v.drag_state(), DragState::NotDragging);
}

#[test]
fn test_zoom_clamped_to_range() {
    let mut v = ViewportState::new();
    v.set_zoom(0.25);
    assert_relative_eq!(v.zoom(), MIN_ZOOM);
    v.set_zoom(12.0);
    assert_relative_eq!(v.zoom(), MAX_ZOOM);
    v.set_zoom(2.5);
    assert_relative_eq!(v.zoom(), 2.5);
}

#[test]
fn test_non_finite_zoom_ignored() {
    let mut v = ViewportState::new();
    v.set_zoom(2.0);
    assert!(!v.set_zoom(f64::NAN));
    assert!(!v.set_zoom(f64::INFINITY));
    assert_relative_eq!(v.zoom(), 2.0);
}

#[test]
fn test_zoom_by_steps_and_clamps() {
    let mut v = ViewportState::new();
    v.zoom_by(0.5);
    assert_relative_eq!(v.zoom(), 1.5);
    v.zoom_by(-3.0);
    assert_relative_eq!(v.zoom(), 1.0);
}

#[test]
fn test_move_without_drag_is_ignored() {
    let mut v = ViewportState::new();
    assert!(!v.drag_move(10.0, 10.0));
    assert_eq!(v.pan(), (0.0, 0.0));
}

#[test]
fn test_drag_accumulates_until_end() {
    let mut v = ViewportState::new();
    v.drag_start();
    assert!(v.is_dragging());
    assert!(v.drag_move(5.0, -3.0));
    assert!(v.drag_move(2.0, 1.0));
    v.drag_end();
    assert!(!v.drag_move(100.0, 100.0));
    assert_eq!(v.pan(), (7.0, -2.0));
}

#[test]
fn test_non_finite_drag_delta_ignored() {
    let mut v = ViewportState::new();
    v.drag_start();
    assert!(!v.drag_move(f64::NAN, 1.0));
    assert_eq!(v.pan(), (0.0, 0.0));
}

#[test]
fn test_reset_clears_everything() {
    let mut v = ViewportState::new();
    v.set_zoom(4.0);
    v.drag_start();
    v.drag_move(30.0, 40.0);
    v.reset();
    assert_eq!(v, ViewportState::default());
}

#[test]
fn test_overflowing_drag_rejected() {
    let mut v = ViewportState::new();
    v.drag_start();
    assert!(v.drag_move(f64::MAX, 0.0));
    assert!(!v.drag_move(f64::MAX, 0.0));
    assert_eq!(v.pan(), (f64::MAX, 0.0));

    // Still recoverable by dragging back.
    assert!(v.drag_move(-f64::MAX, 0.0));
    assert_eq!(v.pan(), (0.0, 0.0));
    assert!(!v.drag_move(0.0, f64::NEG_INFINITY));
}

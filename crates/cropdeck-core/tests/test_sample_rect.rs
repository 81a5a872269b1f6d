use approx::assert_relative_eq;

use cropdeck_core::geometry::{cover_fit, SampleRect};
use cropdeck_core::viewport::ViewportState;

#[test]
fn test_identity_viewport_samples_cover_fit() {
    let cover = cover_fit(1600, 900, 1200, 300).unwrap();
    let rect = SampleRect::resolve(&cover, &ViewportState::default());
    assert_eq!(rect.x, cover.offset_x);
    assert_eq!(rect.y, cover.offset_y);
    assert_eq!(rect.width, cover.width);
    assert_eq!(rect.height, cover.height);
}

#[test]
fn test_zoom_narrows_about_center() {
    let cover = cover_fit(1600, 900, 1200, 300).unwrap();
    let mut v = ViewportState::new();
    v.set_zoom(2.0);
    let rect = SampleRect::resolve(&cover, &v);

    assert_relative_eq!(rect.width, 800.0);
    assert_relative_eq!(rect.height, 200.0);
    // Centre is unchanged.
    assert_relative_eq!(rect.x + rect.width / 2.0, 800.0);
    assert_relative_eq!(rect.y + rect.height / 2.0, 450.0);
}

#[test]
fn test_zoom_is_strictly_monotonic() {
    let cover = cover_fit(3000, 2000, 400, 400).unwrap();
    let mut v = ViewportState::new();
    let mut prev = SampleRect::resolve(&cover, &v);

    for step in 1..=40 {
        v.set_zoom(1.0 + step as f64 * 0.1);
        let rect = SampleRect::resolve(&cover, &v);
        assert!(rect.width < prev.width, "zoom {}", v.zoom());
        assert!(rect.height < prev.height, "zoom {}", v.zoom());
        prev = rect;
    }
}

#[test]
fn test_pan_is_divided_by_zoom() {
    let cover = cover_fit(1000, 1000, 400, 400).unwrap();
    let mut v = ViewportState::new();
    v.set_zoom(2.0);
    let centered = SampleRect::resolve(&cover, &v);

    v.drag_start();
    v.drag_move(100.0, -40.0);
    let panned = SampleRect::resolve(&cover, &v);

    // Dragging right moves the window left in source space.
    assert_relative_eq!(panned.x, centered.x - 50.0);
    assert_relative_eq!(panned.y, centered.y + 20.0);
    assert_relative_eq!(panned.width, centered.width);
}

#[test]
fn test_pan_round_trip_restores_position() {
    let cover = cover_fit(1920, 1080, 300, 80).unwrap();
    let mut v = ViewportState::new();
    v.set_zoom(3.3);
    v.drag_start();
    v.drag_move(12.5, -7.25);
    let before = SampleRect::resolve(&cover, &v);

    v.drag_move(143.0, 61.0);
    v.drag_move(-143.0, -61.0);
    let after = SampleRect::resolve(&cover, &v);

    assert_relative_eq!(after.x, before.x, epsilon = 1e-9);
    assert_relative_eq!(after.y, before.y, epsilon = 1e-9);
    assert_relative_eq!(after.width, before.width);
    assert_relative_eq!(after.height, before.height);
}

#[test]
fn test_extreme_pan_is_not_clamped() {
    let cover = cover_fit(100, 100, 400, 400).unwrap();
    let mut v = ViewportState::new();
    v.set_zoom(5.0);
    v.drag_start();
    v.drag_move(10_000.0, 0.0);
    let rect = SampleRect::resolve(&cover, &v);
    assert!(rect.x + rect.width < 0.0);
    assert!(!rect.within(100, 100));
}

#[test]
fn test_within_bounds_at_rest() {
    let cover = cover_fit(640, 480, 1200, 300).unwrap();
    let rect = SampleRect::resolve(&cover, &ViewportState::default());
    assert!(rect.within(640, 480));
}

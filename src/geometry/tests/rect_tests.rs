//! Tests for the oriented rectangle primitive

extern crate std;

use crate::geometry::{OrientedRect, Point};

const TOLERANCE: f32 = 1e-4;

fn assert_close(a: Point, b: Point) {
    std::assert!(
        (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE,
        "expected ({}, {}), got ({}, {})",
        b.x, b.y, a.x, a.y
    );
}

#[test]
fn test_axis_aligned_corners() {
    let rect = OrientedRect::new(Point::new(10.0, 20.0), 4.0, 6.0);

    assert_close(rect.top_left(), Point::new(7.0, 18.0));
    assert_close(rect.top_right(), Point::new(13.0, 18.0));
    assert_close(rect.bottom_left(), Point::new(7.0, 22.0));
    assert_close(rect.bottom_right(), Point::new(13.0, 22.0));
}

#[test]
fn test_rotation_preserves_center() {
    let mut rect = OrientedRect::new(Point::new(5.0, 5.0), 2.0, 8.0);
    rect.rotate(1.2345);

    assert_close(rect.center(), Point::new(5.0, 5.0));
}

#[test]
fn test_quarter_turn_swaps_extents() {
    let mut rect = OrientedRect::new(Point::new(0.0, 0.0), 2.0, 8.0);
    rect.rotate(std::f32::consts::FRAC_PI_2);

    let bounds = rect.bounds();
    std::assert!((bounds.width() - 2.0).abs() < TOLERANCE);
    std::assert!((bounds.height() - 8.0).abs() < TOLERANCE);
}

#[test]
fn test_rotation_round_trip() {
    let original = OrientedRect::new(Point::new(3.0, -7.0), 5.0, 11.0);

    for &angle in &[0.1, 0.7854, 1.5708, 2.9, -0.4] {
        let mut rect = original;
        rect.rotate(angle);
        rect.rotate(-angle);

        let expected = original.corners();
        let actual = rect.corners();
        for i in 0..4 {
            assert_close(actual[i], expected[i]);
        }
    }
}

#[test]
fn test_rotation_composes() {
    let mut stepped = OrientedRect::new(Point::new(1.0, 2.0), 3.0, 4.0);
    stepped.rotate(0.3);
    stepped.rotate(0.5);

    let mut direct = OrientedRect::new(Point::new(1.0, 2.0), 3.0, 4.0);
    direct.rotate(0.8);

    let expected = direct.corners();
    let actual = stepped.corners();
    for i in 0..4 {
        assert_close(actual[i], expected[i]);
    }
}

#[test]
fn test_translate_moves_corners_with_center() {
    let mut rect = OrientedRect::new(Point::new(0.0, 0.0), 10.0, 10.0);
    rect.rotate(0.25);
    let corners_before = rect.corners();

    rect.translate(Point::new(100.0, 50.0));

    assert_close(rect.center(), Point::new(100.0, 50.0));
    let corners_after = rect.corners();
    for i in 0..4 {
        assert_close(
            corners_after[i],
            corners_before[i].offset(&Point::new(100.0, 50.0)),
        );
    }
}

#[test]
fn test_rotate_after_translate() {
    // Rotation must happen around the current center, not the origin
    let mut rect = OrientedRect::new(Point::new(0.0, 0.0), 2.0, 2.0);
    rect.translate(Point::new(50.0, 50.0));
    rect.rotate(std::f32::consts::PI);

    assert_close(rect.center(), Point::new(50.0, 50.0));
    // A half-turn maps the top-left corner onto the bottom-right position
    assert_close(rect.top_left(), Point::new(51.0, 51.0));
}

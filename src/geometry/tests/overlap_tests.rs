//! Tests for the overlap classification predicates

extern crate std;

use crate::geometry::{classify, contained, disjoint, OrientedRect, Overlap, Point};

fn window() -> OrientedRect {
    OrientedRect::new(Point::new(50.0, 50.0), 100.0, 100.0)
}

#[test]
fn test_disjoint_part() {
    let part = OrientedRect::new(Point::new(200.0, 200.0), 10.0, 10.0);

    std::assert!(disjoint(&part, &window()));
    std::assert!(!contained(&part, &window()));
    std::assert_eq!(classify(&part, &window()), Overlap::Disjoint);
}

#[test]
fn test_contained_part() {
    let part = OrientedRect::new(Point::new(50.0, 50.0), 10.0, 10.0);

    std::assert!(!disjoint(&part, &window()));
    std::assert!(contained(&part, &window()));
    std::assert_eq!(classify(&part, &window()), Overlap::Contained);
}

#[test]
fn test_partial_overlap() {
    // Straddles the window's left edge
    let part = OrientedRect::new(Point::new(0.0, 50.0), 10.0, 10.0);

    std::assert!(!disjoint(&part, &window()));
    std::assert!(!contained(&part, &window()));
    std::assert_eq!(classify(&part, &window()), Overlap::Partial);
}

#[test]
fn test_predicates_mutually_exclusive() {
    let centers = [
        Point::new(-30.0, -30.0),
        Point::new(0.0, 0.0),
        Point::new(50.0, 50.0),
        Point::new(99.0, 99.0),
        Point::new(130.0, 50.0),
    ];

    for center in centers {
        let mut part = OrientedRect::new(center, 20.0, 20.0);
        part.rotate(0.6);
        let both = disjoint(&part, &window()) && contained(&part, &window());
        std::assert!(!both, "both predicates true at ({}, {})", center.x, center.y);
    }
}

#[test]
fn test_touching_edges_are_disjoint() {
    // Part whose extent exactly abuts the window's right edge
    let part = OrientedRect::new(Point::new(105.0, 50.0), 10.0, 10.0);

    std::assert!(disjoint(&part, &window()));
}

#[test]
fn test_rotated_part_uses_full_extent() {
    // A tall thin part centered outside the window reaches into it only
    // once rotated; the extent over all four corners must catch that.
    let mut part = OrientedRect::new(Point::new(110.0, 50.0), 40.0, 2.0);
    std::assert!(disjoint(&part, &window()));

    part.rotate(std::f32::consts::FRAC_PI_4);
    std::assert!(!disjoint(&part, &window()));
}

//! Tests for the unit-to-pixel scale

extern crate std;

use crate::engine::errors::RoiError;
use crate::engine::scale::UnitScale;
use crate::geometry::Point;

#[test]
fn test_pixels_per_unit() {
    let scale = UnitScale::pixels_per_unit(4.0).unwrap();

    std::assert_eq!(scale.to_pixels(2.5), 10.0);
    let p = scale.point_to_pixels(Point::new(1.0, -3.0));
    std::assert_eq!(p.x, 4.0);
    std::assert_eq!(p.y, -12.0);
}

#[test]
fn test_from_dpi() {
    // 254 dpi over 25.4 mm/inch comes out to exactly 10 px/mm
    let scale = UnitScale::from_dpi(254.0).unwrap();
    std::assert!((scale.factor() - 10.0).abs() < 1e-5);
}

#[test]
fn test_non_positive_factor_rejected() {
    std::assert!(matches!(
        UnitScale::pixels_per_unit(0.0),
        Err(RoiError::InvalidScale(_))
    ));
    std::assert!(matches!(
        UnitScale::pixels_per_unit(-2.0),
        Err(RoiError::InvalidScale(_))
    ));
}

#![allow(clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_scaled_multiplies_both_axes() {
    assert_eq!(Point::new(1.5, -2.0).scaled(2.0), Point::new(3.0, -4.0));
}

#[test]
fn point_is_finite_rejects_nan_and_infinity() {
    assert!(Point::new(0.0, 1.0).is_finite());
    assert!(!Point::new(f64::NAN, 1.0).is_finite());
    assert!(!Point::new(0.0, f64::INFINITY).is_finite());
}

// --- Viewport ---

#[test]
fn viewport_default_is_empty_at_unit_dpr() {
    let v = Viewport::default();
    assert_eq!(v.backing_size(), (0, 0));
    assert_eq!(v.effective_dpr(), 1.0);
}

#[test]
fn viewport_backing_size_multiplies_by_dpr() {
    assert_eq!(Viewport::new(100.0, 50.0, 2.0).backing_size(), (200, 100));
}

#[test]
fn viewport_backing_size_rounds_up_fractional_pixels() {
    assert_eq!(Viewport::new(10.5, 3.2, 1.5).backing_size(), (16, 5));
}

#[test]
fn viewport_invalid_dpr_falls_back_to_one() {
    assert_eq!(Viewport::new(10.0, 10.0, 0.0).effective_dpr(), 1.0);
    assert_eq!(Viewport::new(10.0, 10.0, -2.0).effective_dpr(), 1.0);
    assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).backing_size(), (10, 10));
}

#[test]
fn viewport_negative_size_clamps_to_zero() {
    assert_eq!(Viewport::new(-5.0, 8.0, 1.0).backing_size(), (0, 8));
}

#![allow(clippy::float_cmp)]

use super::*;

const RED: Color = Color::rgb(255, 0, 0);

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn stroke_line(r: &mut Raster, a: Point, b: Point) {
    r.begin_path();
    r.move_to(a).unwrap();
    r.line_to(b).unwrap();
    r.stroke().unwrap();
}

fn painted(r: &Raster, x: u32, y: u32) -> bool {
    r.pixel(x, y).is_some_and(|p| p.a > 0)
}

// =============================================================
// Construction and defaults
// =============================================================

#[test]
fn new_raster_is_fully_transparent() {
    let r = Raster::new(8, 4).unwrap();
    assert_eq!(r.width(), 8);
    assert_eq!(r.height(), 4);
    assert_eq!(r.pixels().len(), 32);
    assert_eq!(r.painted_count(), 0);
}

#[test]
fn oversized_raster_is_rejected() {
    assert_eq!(Raster::new(100_000, 100_000).unwrap_err(), RasterError::TooLarge { width: 100_000, height: 100_000 });
    assert!(matches!(Raster::new(u32::MAX, u32::MAX), Err(RasterError::TooLarge { .. })));
    assert!(Raster::new(4096, 4096).is_ok());
}

#[test]
fn rejected_backing_size_keeps_previous_buffer() {
    let mut r = Raster::new(4, 4).unwrap();
    assert!(matches!(r.set_backing_size(5000, 5000), Err(RasterError::TooLarge { .. })));
    assert_eq!((r.width(), r.height()), (4, 4));
    assert_eq!(r.pixels().len(), 16);
}

#[test]
fn new_raster_has_canvas_defaults() {
    let r = Raster::new(1, 1).unwrap();
    assert_eq!(r.transform_scale(), (1.0, 1.0));
    assert_eq!(r.line_width(), 1.0);
    assert_eq!(r.stroke_color(), Color::BLACK);
    assert_eq!(r.line_cap(), LineCap::Butt);
    assert_eq!(r.line_join(), LineJoin::Miter);
    assert_eq!(r.composite(), CompositeMode::SourceOver);
}

#[test]
fn pixel_out_of_bounds_is_none() {
    let r = Raster::new(2, 2).unwrap();
    assert!(r.pixel(2, 0).is_none());
    assert!(r.pixel(0, 2).is_none());
    assert!(r.pixel(1, 1).is_some());
}

#[test]
fn set_backing_size_resets_state_and_clears_pixels() {
    let mut r = Raster::new(10, 10).unwrap();
    r.scale(2.0, 2.0).unwrap();
    r.set_line_width(7.0);
    r.set_stroke_color(RED);
    r.set_line_cap(LineCap::Round);
    r.set_line_join(LineJoin::Round);
    r.set_composite(CompositeMode::DestinationOut).unwrap();
    r.fill(RED);

    r.set_backing_size(4, 3).unwrap();

    assert_eq!((r.width(), r.height()), (4, 3));
    assert_eq!(r.painted_count(), 0);
    assert_eq!(r.transform_scale(), (1.0, 1.0));
    assert_eq!(r.line_width(), 1.0);
    assert_eq!(r.stroke_color(), Color::BLACK);
    assert_eq!(r.line_cap(), LineCap::Butt);
    assert_eq!(r.line_join(), LineJoin::Miter);
    assert_eq!(r.composite(), CompositeMode::SourceOver);
}

#[test]
fn scale_multiplies_current_transform() {
    let mut r = Raster::new(1, 1).unwrap();
    r.scale(2.0, 2.0).unwrap();
    r.scale(1.5, 1.5).unwrap();
    assert_eq!(r.transform_scale(), (3.0, 3.0));
}

#[test]
fn invalid_line_width_is_ignored() {
    let mut r = Raster::new(1, 1).unwrap();
    r.set_line_width(4.0);
    r.set_line_width(0.0);
    r.set_line_width(-1.0);
    r.set_line_width(f64::NAN);
    assert_eq!(r.line_width(), 4.0);
}

#[test]
fn non_finite_inputs_are_errors() {
    let mut r = Raster::new(4, 4).unwrap();
    assert_eq!(r.move_to(pt(f64::NAN, 0.0)), Err(RasterError::NonFinite { op: "move_to" }));
    assert_eq!(r.line_to(pt(0.0, f64::INFINITY)), Err(RasterError::NonFinite { op: "line_to" }));
    assert_eq!(r.scale(f64::INFINITY, 1.0), Err(RasterError::NonFinite { op: "scale" }));
}

// =============================================================
// Stroke geometry
// =============================================================

#[test]
fn horizontal_stroke_covers_its_width() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_width(2.0);
    stroke_line(&mut r, pt(2.0, 5.0), pt(8.0, 5.0));

    assert!(painted(&r, 5, 4));
    assert!(painted(&r, 5, 5));
    assert!(!painted(&r, 5, 3));
    assert!(!painted(&r, 5, 6));
    assert_eq!(r.pixel(5, 5), Some(Color::BLACK));
}

#[test]
fn butt_cap_stops_at_endpoint() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_width(2.0);
    stroke_line(&mut r, pt(2.0, 5.0), pt(8.0, 5.0));
    assert!(!painted(&r, 8, 5));
}

#[test]
fn round_cap_extends_past_endpoint() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_width(2.0);
    r.set_line_cap(LineCap::Round);
    stroke_line(&mut r, pt(2.0, 5.0), pt(8.0, 5.0));
    assert!(painted(&r, 8, 5));
    assert!(!painted(&r, 9, 5));
}

#[test]
fn square_cap_extends_past_endpoint() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_width(2.0);
    r.set_line_cap(LineCap::Square);
    stroke_line(&mut r, pt(2.0, 5.0), pt(8.0, 5.0));
    assert!(painted(&r, 8, 5));
}

#[test]
fn zero_length_segment_draws_dot_only_with_round_cap() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_width(4.0);
    stroke_line(&mut r, pt(5.0, 5.0), pt(5.0, 5.0));
    assert_eq!(r.painted_count(), 0);

    r.set_line_cap(LineCap::Round);
    stroke_line(&mut r, pt(5.0, 5.0), pt(5.0, 5.0));
    assert!(painted(&r, 5, 5));
    assert!(painted(&r, 4, 4));
}

#[test]
fn lone_move_to_strokes_nothing() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_cap(LineCap::Round);
    r.set_line_width(4.0);
    r.begin_path();
    r.move_to(pt(5.0, 5.0)).unwrap();
    r.stroke().unwrap();
    assert_eq!(r.painted_count(), 0);
}

#[test]
fn begin_path_discards_previous_segments() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_width(2.0);
    r.move_to(pt(1.0, 1.0)).unwrap();
    r.line_to(pt(8.0, 1.0)).unwrap();
    r.begin_path();
    r.stroke().unwrap();
    assert_eq!(r.painted_count(), 0);
}

#[test]
fn close_path_strokes_closing_segment() {
    let mut open = Raster::new(10, 10).unwrap();
    open.set_line_width(2.0);
    open.begin_path();
    open.move_to(pt(1.0, 1.0)).unwrap();
    open.line_to(pt(8.0, 1.0)).unwrap();
    open.line_to(pt(8.0, 8.0)).unwrap();
    let mut closed = open.clone();

    open.stroke().unwrap();
    closed.close_path();
    closed.stroke().unwrap();

    // (4, 4) sits on the diagonal back to the start.
    assert!(!painted(&open, 4, 4));
    assert!(painted(&closed, 4, 4));
}

#[test]
fn scale_applies_to_points_and_width() {
    let mut r = Raster::new(10, 10).unwrap();
    r.scale(2.0, 2.0).unwrap();
    r.set_line_width(1.0);
    stroke_line(&mut r, pt(1.0, 1.0), pt(4.0, 1.0));

    assert!(painted(&r, 5, 1));
    assert!(painted(&r, 5, 2));
    assert!(!painted(&r, 5, 0));
    assert!(!painted(&r, 5, 3));
}

// =============================================================
// Compositing
// =============================================================

#[test]
fn destination_out_erases_to_transparent() {
    let mut r = Raster::new(10, 10).unwrap();
    r.fill(RED);
    r.set_line_width(2.0);
    r.set_composite(CompositeMode::DestinationOut).unwrap();
    stroke_line(&mut r, pt(0.0, 5.0), pt(10.0, 5.0));

    assert_eq!(r.pixel(5, 5), Some(Color::TRANSPARENT));
    assert_eq!(r.pixel(5, 4), Some(Color::TRANSPARENT));
    assert_eq!(r.pixel(5, 0), Some(RED));
}

#[test]
fn destination_out_ignores_stroke_color() {
    let mut r = Raster::new(4, 4).unwrap();
    r.fill(RED);
    r.set_line_width(2.0);
    r.set_stroke_color(Color::WHITE);
    r.set_composite(CompositeMode::DestinationOut).unwrap();
    stroke_line(&mut r, pt(0.0, 2.0), pt(4.0, 2.0));
    assert_eq!(r.pixel(1, 2).map(|p| p.a), Some(0));
}

#[test]
fn source_over_opaque_replaces_destination() {
    let mut r = Raster::new(4, 4).unwrap();
    r.fill(RED);
    r.set_line_width(2.0);
    r.set_stroke_color(Color::rgb(0, 0, 255));
    stroke_line(&mut r, pt(0.0, 2.0), pt(4.0, 2.0));
    assert_eq!(r.pixel(1, 2), Some(Color::rgb(0, 0, 255)));
}

#[test]
fn source_over_translucent_blends_with_destination() {
    let mut r = Raster::new(4, 4).unwrap();
    r.fill(Color::WHITE);
    r.set_line_width(2.0);
    r.set_stroke_color(Color { r: 255, g: 0, b: 0, a: 128 });
    stroke_line(&mut r, pt(0.0, 2.0), pt(4.0, 2.0));

    let p = r.pixel(1, 2).unwrap();
    assert_eq!(p.r, 255);
    assert_eq!(p.a, 255);
    assert!((i32::from(p.g) - 127).abs() <= 1, "g = {}", p.g);
}

#[test]
fn overlapping_segments_in_one_stroke_blend_once() {
    let mut r = Raster::new(10, 10).unwrap();
    r.set_line_width(2.0);
    r.set_stroke_color(Color { r: 255, g: 0, b: 0, a: 128 });
    r.begin_path();
    r.move_to(pt(1.0, 5.0)).unwrap();
    r.line_to(pt(8.0, 5.0)).unwrap();
    r.line_to(pt(1.0, 5.0)).unwrap();
    r.stroke().unwrap();
    assert_eq!(r.pixel(4, 5).map(|p| p.a), Some(128));
}

#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- Conversions ---

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(20.0, 10.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    // 5*3 + 20 = 35, 5*3 + 10 = 25
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

#[test]
fn conversions_are_inverse_at_fractional_zoom() {
    let cam = Camera { pan_x: 13.7, pan_y: -42.3, zoom: 0.75 };
    let world = Point::new(333.3, -999.9);
    let back = cam.screen_to_world(cam.world_to_screen(world));
    assert!(point_approx_eq(world, back));
}

#[test]
fn screen_dist_to_world_ignores_pan() {
    let cam = Camera { pan_x: 999.0, pan_y: -999.0, zoom: 4.0 };
    assert!(approx_eq(cam.screen_dist_to_world(8.0), 2.0));
}

// --- zoom_to_point ---

#[test]
fn zoom_to_point_keeps_anchor_stationary() {
    let mut cam = Camera { pan_x: 30.0, pan_y: -15.0, zoom: 1.3 };
    let cursor = Point::new(412.0, 287.0);
    let before = cam.screen_to_world(cursor);

    cam.zoom_to_point(cursor, 2.1);

    assert!(approx_eq(cam.zoom, 2.1));
    let after = cam.world_to_screen(before);
    assert!(point_approx_eq(after, cursor));
}

#[test]
fn zoom_to_point_at_origin_leaves_pan_untouched() {
    let mut cam = Camera::default();
    cam.zoom_to_point(Point::new(0.0, 0.0), 2.0);
    assert!(approx_eq(cam.pan_x, 0.0));
    assert!(approx_eq(cam.pan_y, 0.0));
}

#[test]
fn zoom_to_point_out_moves_pan_toward_cursor() {
    let mut cam = Camera::default();
    cam.zoom_to_point(Point::new(100.0, 100.0), 0.5);
    // World (100, 100) must still render at (100, 100): 100 * 0.5 + pan = 100.
    assert!(approx_eq(cam.pan_x, 50.0));
    assert!(approx_eq(cam.pan_y, 50.0));
}

// --- pan_by ---

#[test]
fn pan_by_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by(10.0, -4.0);
    cam.pan_by(2.5, 1.0);
    assert!(approx_eq(cam.pan_x, 12.5));
    assert!(approx_eq(cam.pan_y, -3.0));
}

#[test]
fn pan_by_does_not_touch_zoom() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 1.7 };
    cam.pan_by(100.0, 100.0);
    assert_eq!(cam.zoom, 1.7);
}

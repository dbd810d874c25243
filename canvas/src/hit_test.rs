#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::SceneObject;
use crate::furniture::FurnitureKind;

fn chair_at(x: f64, y: f64) -> SceneObject {
    SceneObject::furniture(FurnitureKind::Chair, x, y)
}

fn orig() -> Bounds {
    Bounds { x: 100.0, y: 100.0, width: 60.0, height: 40.0 }
}

// =============================================================
// resize_handle_positions
// =============================================================

#[test]
fn handle_positions_follow_anchor_order() {
    let p = resize_handle_positions(0.0, 0.0, 100.0, 50.0);
    assert_eq!(p[0], Point::new(50.0, 0.0)); // N
    assert_eq!(p[1], Point::new(100.0, 0.0)); // Ne
    assert_eq!(p[2], Point::new(100.0, 25.0)); // E
    assert_eq!(p[3], Point::new(100.0, 50.0)); // Se
    assert_eq!(p[4], Point::new(50.0, 50.0)); // S
    assert_eq!(p[5], Point::new(0.0, 50.0)); // Sw
    assert_eq!(p[6], Point::new(0.0, 25.0)); // W
    assert_eq!(p[7], Point::new(0.0, 0.0)); // Nw
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_store_hits_nothing() {
    let doc = DocStore::new();
    assert!(hit_test(Point::new(10.0, 10.0), &doc, &Camera::default(), None).is_none());
}

#[test]
fn body_hit_inside_furniture() {
    let mut doc = DocStore::new();
    let id = doc.add(chair_at(0.0, 0.0));
    let hit = hit_test(Point::new(30.0, 30.0), &doc, &Camera::default(), None).unwrap();
    assert_eq!(hit.object_id, id);
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn topmost_object_wins() {
    let mut doc = DocStore::new();
    doc.add(chair_at(0.0, 0.0));
    let top = doc.add(chair_at(20.0, 20.0));
    let hit = hit_test(Point::new(30.0, 30.0), &doc, &Camera::default(), None).unwrap();
    assert_eq!(hit.object_id, top);
}

#[test]
fn non_evented_objects_are_transparent() {
    let mut doc = DocStore::new();
    doc.add(SceneObject::room(
        0.0,
        0.0,
        500.0,
        500.0,
        crate::doc::Style { fill: None, stroke: "#000".into(), stroke_width: 1.0 },
    ));
    assert!(hit_test(Point::new(30.0, 30.0), &doc, &Camera::default(), None).is_none());
}

#[test]
fn selected_handle_beats_body() {
    let mut doc = DocStore::new();
    let id = doc.add(chair_at(0.0, 0.0));
    let hit = hit_test(Point::new(60.0, 60.0), &doc, &Camera::default(), Some(id)).unwrap();
    assert_eq!(hit.part, HitPart::ResizeHandle(ResizeAnchor::Se));
}

#[test]
fn handles_ignored_when_not_selected() {
    let mut doc = DocStore::new();
    doc.add(chair_at(0.0, 0.0));
    let hit = hit_test(Point::new(60.0, 60.0), &doc, &Camera::default(), None).unwrap();
    assert_eq!(hit.part, HitPart::Body);
}

#[test]
fn handle_slop_scales_with_zoom() {
    let mut doc = DocStore::new();
    let id = doc.add(chair_at(0.0, 0.0));
    // 5 world units away from the Se handle: inside at zoom 1 (slop 6), outside at zoom 2 (slop 3).
    let pt = Point::new(65.0, 65.0);
    let near = hit_test(pt, &doc, &Camera::default(), Some(id));
    assert!(matches!(near.map(|h| h.part), Some(HitPart::ResizeHandle(ResizeAnchor::Se))));
    let zoomed = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 2.0 };
    assert!(hit_test(pt, &doc, &zoomed, Some(id)).is_none());
}

// =============================================================
// topmost_in_rect
// =============================================================

#[test]
fn marquee_picks_topmost_overlap() {
    let mut doc = DocStore::new();
    doc.add(chair_at(0.0, 0.0));
    let top = doc.add(chair_at(40.0, 0.0));
    let rect = SelectionRect { x: 50.0, y: 10.0, width: 5.0, height: 5.0 };
    assert_eq!(topmost_in_rect(rect, &doc), Some(top));
}

#[test]
fn marquee_on_empty_area_selects_nothing() {
    let mut doc = DocStore::new();
    doc.add(chair_at(0.0, 0.0));
    let rect = SelectionRect { x: 500.0, y: 500.0, width: 10.0, height: 10.0 };
    assert_eq!(topmost_in_rect(rect, &doc), None);
}

// =============================================================
// resize_bounds
// =============================================================

#[test]
fn resize_se_grows_right_and_down() {
    let b = resize_bounds(orig(), ResizeAnchor::Se, 20.0, 10.0);
    assert_eq!(b, Bounds { x: 100.0, y: 100.0, width: 80.0, height: 50.0 });
}

#[test]
fn resize_nw_moves_origin() {
    let b = resize_bounds(orig(), ResizeAnchor::Nw, -10.0, -5.0);
    assert_eq!(b, Bounds { x: 90.0, y: 95.0, width: 70.0, height: 45.0 });
}

#[test]
fn resize_n_only_changes_height() {
    let b = resize_bounds(orig(), ResizeAnchor::N, 50.0, 10.0);
    assert_eq!(b, Bounds { x: 100.0, y: 110.0, width: 60.0, height: 30.0 });
}

#[test]
fn locked_resize_never_flips() {
    let b = resize_bounds(orig(), ResizeAnchor::E, -500.0, 0.0);
    assert_eq!(b.x, 100.0);
    assert_eq!(b.width, 1.0);

    let b = resize_bounds(orig(), ResizeAnchor::Nw, 500.0, 500.0);
    assert_eq!((b.x, b.y), (159.0, 139.0));
    assert_eq!((b.width, b.height), (1.0, 1.0));
}

#[test]
fn dragging_past_opposite_edge_pins_at_minimum() {
    let b = resize_bounds(orig(), ResizeAnchor::S, 30.0, -100.0);
    assert_eq!(b, Bounds { x: 100.0, y: 100.0, width: 60.0, height: 1.0 });
}

#[test]
fn anchor_cursors() {
    assert_eq!(ResizeAnchor::E.css_cursor(), "ew-resize");
    assert_eq!(ResizeAnchor::Ne.css_cursor(), "nesw-resize");
    assert_eq!(ResizeAnchor::Nw.css_cursor(), "nwse-resize");
}

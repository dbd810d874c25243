#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::{HANDLE_RADIUS_PX, MIN_OBJECT_SIZE};
use crate::doc::{DocStore, ObjectId, SceneObject};
use crate::input::SelectionRect;

/// Which part of an object was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// All anchors, clockwise from the top edge.
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// CSS resize cursor for this handle.
    #[must_use]
    pub fn css_cursor(self) -> &'static str {
        match self {
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }

    fn moves_left(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    fn moves_right(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    fn moves_top(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub object_id: ObjectId,
    pub part: HitPart,
}

/// An axis-aligned box in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// World positions of the eight resize handles, in [`ResizeAnchor::ALL`] order.
#[must_use]
pub fn resize_handle_positions(x: f64, y: f64, w: f64, h: f64) -> [Point; 8] {
    let cx = x + w / 2.0;
    let cy = y + h / 2.0;
    [
        Point::new(cx, y),
        Point::new(x + w, y),
        Point::new(x + w, cy),
        Point::new(x + w, y + h),
        Point::new(cx, y + h),
        Point::new(x, y + h),
        Point::new(x, cy),
        Point::new(x, y),
    ]
}

/// Test which object (if any) is under `world_pt`.
///
/// Handles of the selected object win over any body. Bodies are tested top-most
/// first; objects that are not evented are transparent to the pointer.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &DocStore, camera: &Camera, selected_id: Option<ObjectId>) -> Option<Hit> {
    if let Some(obj) = selected_id.and_then(|id| doc.get(&id)) {
        if let Some(anchor) = handle_at(world_pt, obj, camera) {
            return Some(Hit { object_id: obj.id, part: HitPart::ResizeHandle(anchor) });
        }
    }

    doc.sorted_objects()
        .into_iter()
        .rev()
        .find(|obj| obj.flags.evented && obj.contains(world_pt))
        .map(|obj| Hit { object_id: obj.id, part: HitPart::Body })
}

fn handle_at(world_pt: Point, obj: &SceneObject, camera: &Camera) -> Option<ResizeAnchor> {
    let slop = camera.screen_dist_to_world(HANDLE_RADIUS_PX);
    let positions = resize_handle_positions(obj.x, obj.y, obj.width, obj.height);
    ResizeAnchor::ALL
        .into_iter()
        .zip(positions)
        .find(|(_, pos)| (world_pt.x - pos.x).abs() <= slop && (world_pt.y - pos.y).abs() <= slop)
        .map(|(anchor, _)| anchor)
}

/// Top-most selectable object overlapping `rect`.
#[must_use]
pub fn topmost_in_rect(rect: SelectionRect, doc: &DocStore) -> Option<ObjectId> {
    doc.sorted_objects()
        .into_iter()
        .rev()
        .find(|obj| obj.flags.selectable && rect.intersects(obj.x, obj.y, obj.width, obj.height))
        .map(|obj| obj.id)
}

/// Box produced by dragging `anchor` of `orig` by `(dx, dy)` world units.
///
/// Flip is locked: the moving edge stops `MIN_OBJECT_SIZE` short of the
/// opposite edge.
#[must_use]
pub fn resize_bounds(orig: Bounds, anchor: ResizeAnchor, dx: f64, dy: f64) -> Bounds {
    let mut left = orig.x;
    let mut right = orig.x + orig.width;
    let mut top = orig.y;
    let mut bottom = orig.y + orig.height;

    if anchor.moves_left() {
        left += dx;
    }
    if anchor.moves_right() {
        right += dx;
    }
    if anchor.moves_top() {
        top += dy;
    }
    if anchor.moves_bottom() {
        bottom += dy;
    }

    if anchor.moves_left() {
        left = left.min(right - MIN_OBJECT_SIZE);
    }
    if anchor.moves_right() {
        right = right.max(left + MIN_OBJECT_SIZE);
    }
    if anchor.moves_top() {
        top = top.min(bottom - MIN_OBJECT_SIZE);
    }
    if anchor.moves_bottom() {
        bottom = bottom.max(top + MIN_OBJECT_SIZE);
    }

    Bounds {
        x: left,
        y: top,
        width: (right - left).max(MIN_OBJECT_SIZE),
        height: (bottom - top).max(MIN_OBJECT_SIZE),
    }
}

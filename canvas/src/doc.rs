//! Scene model: surface objects, their style and interaction flags, and the
//! in-memory store.
//!
//! Three kinds of object live on the surface: grid lines and the room outline
//! (seeded once, never interactive) and furniture items placed by the user.
//! `DocStore` owns all of them and hands out draw order through
//! `sorted_objects`, which the renderer and the hit-tester both read.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{FURNITURE_FILL, FURNITURE_STROKE};
use crate::furniture::FurnitureKind;

/// Unique identifier for a surface object.
pub type ObjectId = Uuid;

/// What an object on the surface represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// A straight guide segment from `(x, y)` to `(x + width, y + height)`.
    GridLine,
    /// The fixed room boundary rectangle.
    Room,
    /// A user-placed furniture rectangle.
    Furniture(FurnitureKind),
}

/// Paint attributes for an object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// CSS fill color. `None` for stroke-only objects.
    pub fill: Option<String>,
    /// CSS stroke color.
    pub stroke: String,
    /// Stroke width in world units.
    pub stroke_width: f64,
}

/// Interaction flags for an object.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectFlags {
    /// Can become the active item.
    pub selectable: bool,
    /// Participates in hit-testing at all.
    pub evented: bool,
    /// Included in [`DocStore::exportable`] snapshots.
    pub exportable: bool,
}

impl ObjectFlags {
    /// Flags for decorative, non-interactive objects.
    #[must_use]
    pub fn inert(exportable: bool) -> Self {
        Self { selectable: false, evented: false, exportable }
    }

    /// Flags for user-manipulated items.
    #[must_use]
    pub fn interactive() -> Self {
        Self { selectable: true, evented: true, exportable: true }
    }
}

/// An object on the planner surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    /// Left edge of the bounding box (line start for grid lines).
    pub x: f64,
    /// Top edge of the bounding box (line start for grid lines).
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    /// Stacking order; lower values are drawn beneath higher values.
    /// Assigned by [`DocStore::add`].
    pub z_index: i64,
    pub style: Style,
    pub flags: ObjectFlags,
}

impl SceneObject {
    /// A non-interactive guide line from `from` to `to`.
    #[must_use]
    pub fn grid_line(from: Point, to: Point, stroke: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ObjectKind::GridLine,
            x: from.x,
            y: from.y,
            width: to.x - from.x,
            height: to.y - from.y,
            corner_radius: 0.0,
            z_index: 0,
            style: Style { fill: None, stroke: stroke.to_owned(), stroke_width: 1.0 },
            flags: ObjectFlags::inert(false),
        }
    }

    /// The fixed room outline.
    #[must_use]
    pub fn room(x: f64, y: f64, width: f64, height: f64, style: Style) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ObjectKind::Room,
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
            z_index: 0,
            style,
            flags: ObjectFlags::inert(true),
        }
    }

    /// A furniture item of `kind` with its top-left corner at `(left, top)`.
    #[must_use]
    pub fn furniture(kind: FurnitureKind, left: f64, top: f64) -> Self {
        let preset = kind.preset();
        Self {
            id: Uuid::new_v4(),
            kind: ObjectKind::Furniture(kind),
            x: left,
            y: top,
            width: preset.width,
            height: preset.height,
            corner_radius: preset.corner_radius,
            z_index: 0,
            style: Style {
                fill: Some(FURNITURE_FILL.to_owned()),
                stroke: FURNITURE_STROKE.to_owned(),
                stroke_width: 1.0,
            },
            flags: ObjectFlags::interactive(),
        }
    }

    /// The furniture type, if this object is a furniture item.
    #[must_use]
    pub fn furniture_kind(&self) -> Option<FurnitureKind> {
        match self.kind {
            ObjectKind::Furniture(kind) => Some(kind),
            ObjectKind::GridLine | ObjectKind::Room => None,
        }
    }

    /// Whether the world point lies inside the bounding box (edges inclusive).
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}

/// In-memory store of surface objects.
pub struct DocStore {
    objects: HashMap<ObjectId, SceneObject>,
    next_z: i64,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: HashMap::new(), next_z: 0 }
    }

    /// Add an object on top of everything already present and return its id.
    pub fn add(&mut self, mut obj: SceneObject) -> ObjectId {
        obj.z_index = self.next_z;
        self.next_z += 1;
        let id = obj.id;
        self.objects.insert(id, obj);
        id
    }

    /// Remove an object by id, returning it if it was present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<SceneObject> {
        self.objects.remove(id)
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Return a mutable reference to an object by id.
    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    /// Move an object above every other object. Returns false if absent.
    pub fn bring_to_front(&mut self, id: &ObjectId) -> bool {
        let Some(obj) = self.objects.get_mut(id) else {
            return false;
        };
        obj.z_index = self.next_z;
        self.next_z += 1;
        true
    }

    /// Return all objects sorted by `(z_index, id)` for draw-order.
    #[must_use]
    pub fn sorted_objects(&self) -> Vec<&SceneObject> {
        let mut objs: Vec<&SceneObject> = self.objects.values().collect();
        objs.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        objs
    }

    /// Objects that belong in an exported snapshot, in draw order.
    #[must_use]
    pub fn exportable(&self) -> Vec<&SceneObject> {
        self.sorted_objects()
            .into_iter()
            .filter(|obj| obj.flags.exportable)
            .collect()
    }

    /// Number of objects of the given kind.
    #[must_use]
    pub fn count_kind(&self, kind: ObjectKind) -> usize {
        self.objects.values().filter(|obj| obj.kind == kind).count()
    }

    /// Number of furniture items of any type.
    #[must_use]
    pub fn furniture_count(&self) -> usize {
        self.objects
            .values()
            .filter(|obj| obj.furniture_kind().is_some())
            .count()
    }

    /// Number of objects currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the store contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}

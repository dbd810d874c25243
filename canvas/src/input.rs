//! Input model: modifier keys, buttons, keys, cursors, and the gesture state machine.
//!
//! `UiState` is the persistent interaction state the renderer and host read
//! (active item, space-held flag, selection-enabled flag, cursor, marquee).
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up, carrying the context needed to compute incremental deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::ObjectId;
use crate::hit::ResizeAnchor;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A physical keyboard key, named by `KeyboardEvent.code` (e.g. `"Space"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.0 == "Space"
    }

    /// Delete or Backspace.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }
}

/// Where a keyboard event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTarget {
    /// The surface or any non-editable element.
    #[default]
    Surface,
    /// A text input, textarea, select, or content-editable element.
    TextEntry,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Cursor indicator the host should show over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Space is held; a pan can start.
    Grab,
    /// A pan is in progress.
    Grabbing,
    /// Over a furniture body.
    Move,
    /// Over a resize handle.
    Resize(ResizeAnchor),
}

impl Cursor {
    /// CSS `cursor` value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Move => "move",
            Self::Resize(anchor) => anchor.css_cursor(),
        }
    }
}

/// World-space rectangle with non-negative size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    /// Normalized rectangle spanning two corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Whether this rectangle overlaps the given box (touching edges count).
    #[must_use]
    pub fn intersects(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        self.x <= x + width && x <= self.x + self.width && self.y <= y + height && y <= self.y + self.height
    }
}

/// Persistent UI state visible to the renderer and host.
#[derive(Debug, Clone)]
pub struct UiState {
    /// The active (selected) furniture item, if any.
    pub selected_id: Option<ObjectId>,
    /// Space is currently held down.
    pub space_held: bool,
    /// Click/drag selection is allowed. Disabled for the duration of a pan.
    pub selection_enabled: bool,
    /// Cursor indicator last requested.
    pub cursor: Cursor,
    /// In-progress drag-select rectangle, in world space.
    pub marquee: Option<SelectionRect>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_id: None,
            space_held: false,
            selection_enabled: true,
            cursor: Cursor::Default,
            marquee: None,
        }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Space-gated viewport pan.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// Moving the active item.
    DraggingObject {
        id: ObjectId,
        /// World-space position of the pointer at the previous event.
        last_world: Point,
    },
    /// Resizing the active item by one of its eight handles.
    ResizingObject {
        id: ObjectId,
        anchor: ResizeAnchor,
        /// World-space pointer position at the start of the resize.
        start_world: Point,
        orig_x: f64,
        orig_y: f64,
        orig_w: f64,
        orig_h: f64,
    },
    /// Drag-selecting from an anchor corner.
    Marquee {
        /// World-space corner where the drag started.
        anchor_world: Point,
    },
}

impl InputState {
    /// The object this gesture is manipulating, if any.
    #[must_use]
    pub fn target(&self) -> Option<ObjectId> {
        match self {
            Self::DraggingObject { id, .. } | Self::ResizingObject { id, .. } => Some(*id),
            Self::Idle | Self::Panning { .. } | Self::Marquee { .. } => None,
        }
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }
}

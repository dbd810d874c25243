//! Shared numeric constants for the canvas crate.
//!
//! Values that users may want to tune live in [`crate::config::PlannerConfig`];
//! the defaults there are taken from this module.

// ── Surface ─────────────────────────────────────────────────────

/// Logical width of the drawing area.
pub const SURFACE_WIDTH: f64 = 1200.0;

/// Logical height of the drawing area.
pub const SURFACE_HEIGHT: f64 = 800.0;

/// Surface background fill.
pub const BACKGROUND_COLOR: &str = "#fafafa";

// ── Grid ────────────────────────────────────────────────────────

/// Distance between adjacent grid lines, in world units.
pub const GRID_SPACING: f64 = 50.0;

/// Grid line stroke color.
pub const GRID_STROKE: &str = "#d1d5db";

// ── Room ────────────────────────────────────────────────────────

pub const ROOM_LEFT: f64 = 200.0;
pub const ROOM_TOP: f64 = 150.0;
pub const ROOM_WIDTH: f64 = 600.0;
pub const ROOM_HEIGHT: f64 = 400.0;
pub const ROOM_FILL: &str = "rgba(59,130,246,0.15)";
pub const ROOM_STROKE: &str = "#3b82f6";
pub const ROOM_STROKE_WIDTH: f64 = 3.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.4;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 3.0;

/// Per-pixel wheel factor: `zoom *= WHEEL_ZOOM_BASE ^ delta_y`.
pub const WHEEL_ZOOM_BASE: f64 = 0.999;

// ── Furniture ───────────────────────────────────────────────────

/// Default drop position (left, top) for new furniture, in world units.
pub const DROP_LEFT: f64 = 450.0;
pub const DROP_TOP: f64 = 300.0;

/// Furniture fill and stroke.
pub const FURNITURE_FILL: &str = "#e5e7eb";
pub const FURNITURE_STROKE: &str = "#374151";

/// Smallest width/height a resize can produce, in world units.
pub const MIN_OBJECT_SIZE: f64 = 1.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space half-size of a resize handle in pixels.
pub const HANDLE_RADIUS_PX: f64 = 6.0;

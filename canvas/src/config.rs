//! Planner configuration.
//!
//! Every field has a default, so a host can supply a partial JSON document
//! (or none at all). `from_json` validates the result before handing it out.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{
    BACKGROUND_COLOR, DROP_LEFT, DROP_TOP, GRID_SPACING, GRID_STROKE, MAX_ZOOM, MIN_ZOOM, ROOM_FILL, ROOM_HEIGHT,
    ROOM_LEFT, ROOM_STROKE, ROOM_STROKE_WIDTH, ROOM_TOP, ROOM_WIDTH, SURFACE_HEIGHT, SURFACE_WIDTH, WHEEL_ZOOM_BASE,
};
use crate::error::ConfigError;

/// Where newly added furniture lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Always at `drop_left` / `drop_top` in world space, regardless of pan/zoom.
    #[default]
    Fixed,
    /// Centered in the currently visible part of the surface.
    ViewportCenter,
}

/// The room outline rectangle and its paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            left: ROOM_LEFT,
            top: ROOM_TOP,
            width: ROOM_WIDTH,
            height: ROOM_HEIGHT,
            fill: ROOM_FILL.to_owned(),
            stroke: ROOM_STROKE.to_owned(),
            stroke_width: ROOM_STROKE_WIDTH,
        }
    }
}

/// Surface, grid, room, zoom, and placement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub grid_spacing: f64,
    pub grid_stroke: String,
    pub room: RoomConfig,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub wheel_zoom_base: f64,
    pub drop_left: f64,
    pub drop_top: f64,
    pub placement: PlacementMode,
    /// When false, selecting an item brings it to the front.
    pub preserve_object_stacking: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
            background: BACKGROUND_COLOR.to_owned(),
            grid_spacing: GRID_SPACING,
            grid_stroke: GRID_STROKE.to_owned(),
            room: RoomConfig::default(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_base: WHEEL_ZOOM_BASE,
            drop_left: DROP_LEFT,
            drop_top: DROP_TOP,
            placement: PlacementMode::Fixed,
            preserve_object_stacking: true,
        }
    }
}

impl PlannerConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and one of the
    /// range variants when a value fails [`PlannerConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(ConfigError::InvalidSurfaceSize { width: self.width, height: self.height });
        }
        if !is_positive(self.grid_spacing) {
            return Err(ConfigError::InvalidGridSpacing(self.grid_spacing));
        }
        if !is_positive(self.min_zoom) || !self.max_zoom.is_finite() || self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvalidZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if !(self.wheel_zoom_base > 0.0 && self.wheel_zoom_base < 1.0) {
            return Err(ConfigError::InvalidWheelBase(self.wheel_zoom_base));
        }
        Ok(())
    }

    /// Clamp a zoom factor into the configured bounds.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }

    /// The fixed drop position as a point.
    #[must_use]
    pub fn drop_point(&self) -> Point {
        Point::new(self.drop_left, self.drop_top)
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

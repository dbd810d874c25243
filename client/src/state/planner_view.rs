//! Planner telemetry used by non-canvas UI surfaces.
//!
//! ARCHITECTURE
//! ============
//! `PlannerHost` owns the engine and publishes snapshots through this struct
//! after every handled event so the status bar can render without touching
//! the engine.

#[cfg(test)]
#[path = "planner_view_test.rs"]
mod planner_view_test;

use canvas::engine::EngineCore;
use canvas::furniture::FurnitureKind;

/// Live planner telemetry consumed by chrome (status bar).
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerViewState {
    /// The engine is mounted on a canvas.
    pub mounted: bool,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub object_count: usize,
    pub furniture_count: usize,
    /// Kind of the active item, if any.
    pub active: Option<FurnitureKind>,
    pub space_held: bool,
    pub panning: bool,
    pub last_render_ms: Option<f64>,
}

impl Default for PlannerViewState {
    fn default() -> Self {
        Self {
            mounted: false,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            object_count: 0,
            furniture_count: 0,
            active: None,
            space_held: false,
            panning: false,
            last_render_ms: None,
        }
    }
}

impl PlannerViewState {
    /// Refresh from engine state. Render timing is left as is.
    pub fn sync(&mut self, core: &EngineCore) {
        let camera = core.camera();
        self.mounted = true;
        self.zoom = camera.zoom;
        self.pan_x = camera.pan_x;
        self.pan_y = camera.pan_y;
        self.object_count = core.object_count();
        self.furniture_count = core.doc.furniture_count();
        self.active = core.active_object().and_then(canvas::doc::SceneObject::furniture_kind);
        self.space_held = core.ui.space_held;
        self.panning = core.input.is_panning();
    }
}

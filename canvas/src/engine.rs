use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::config::{PlacementMode, PlannerConfig};
use crate::doc::{DocStore, ObjectId, SceneObject, Style};
use crate::error::SurfaceError;
use crate::furniture::FurnitureKind;
use crate::hit::{self, Bounds, Hit, HitPart};
use crate::input::{Button, Cursor, InputState, Key, KeyTarget, Modifiers, SelectionRect, UiState, WheelDelta};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectCreated(ObjectId),
    ObjectDeleted { id: ObjectId },
    SelectionChanged(Option<ObjectId>),
    SetCursor(Cursor),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: DocStore,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    config: PlannerConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl EngineCore {
    /// Build a surface and seed it with the grid and the room outline.
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        let mut core = Self {
            doc: DocStore::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::Idle,
            config,
        };
        core.seed_grid();
        core.seed_room();
        log::debug!("planner surface seeded with {} objects", core.doc.len());
        core
    }

    fn seed_grid(&mut self) {
        let spacing = self.config.grid_spacing;
        let (width, height) = (self.config.width, self.config.height);

        let mut x = 0.0;
        while x <= width {
            let line = SceneObject::grid_line(Point::new(x, 0.0), Point::new(x, height), &self.config.grid_stroke);
            self.doc.add(line);
            x += spacing;
        }

        let mut y = 0.0;
        while y <= height {
            let line = SceneObject::grid_line(Point::new(0.0, y), Point::new(width, y), &self.config.grid_stroke);
            self.doc.add(line);
            y += spacing;
        }
    }

    fn seed_room(&mut self) {
        let room = &self.config.room;
        let style = Style { fill: Some(room.fill.clone()), stroke: room.stroke.clone(), stroke_width: room.stroke_width };
        self.doc
            .add(SceneObject::room(room.left, room.top, room.width, room.height, style));
    }

    // --- Furniture ---

    /// Place a new item of `kind`, make it active, and request a render.
    pub fn add_furniture(&mut self, kind: FurnitureKind) -> Vec<Action> {
        let origin = self.drop_origin(kind);
        let id = self
            .doc
            .add(SceneObject::furniture(kind, origin.x, origin.y));
        self.ui.selected_id = Some(id);
        log::debug!("added {kind:?} {id} at ({}, {})", origin.x, origin.y);
        vec![Action::ObjectCreated(id), Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    /// Resolve a toolbar control identifier and place the matching item.
    /// Unknown identifiers are ignored.
    pub fn on_control_click(&mut self, control_id: &str) -> Vec<Action> {
        match FurnitureKind::from_control_id(control_id) {
            Some(kind) => self.add_furniture(kind),
            None => Vec::new(),
        }
    }

    /// Remove the active item, if any.
    pub fn delete_active(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id.take() else {
            return Vec::new();
        };
        if self.input.target() == Some(id) {
            self.input = InputState::Idle;
        }
        let mut actions = Vec::new();
        if self.doc.remove(&id).is_some() {
            log::debug!("deleted {id}");
            actions.push(Action::ObjectDeleted { id });
        }
        actions.push(Action::SelectionChanged(None));
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Make `id` the active item, or clear the selection with `None`.
    ///
    /// Ids that do not name a selectable object leave the selection unchanged.
    pub fn set_active(&mut self, id: Option<ObjectId>) -> Vec<Action> {
        match id {
            Some(id) => {
                let selectable = self.doc.get(&id).is_some_and(|obj| obj.flags.selectable);
                if !selectable {
                    return Vec::new();
                }
                let mut actions = self.select(id);
                actions.push(Action::RenderNeeded);
                actions
            }
            None => {
                let mut actions = self.clear_selection();
                if !actions.is_empty() {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
        }
    }

    fn drop_origin(&self, kind: FurnitureKind) -> Point {
        match self.config.placement {
            PlacementMode::Fixed => self.config.drop_point(),
            PlacementMode::ViewportCenter => {
                let preset = kind.preset();
                let center = self
                    .camera
                    .screen_to_world(Point::new(self.config.width / 2.0, self.config.height / 2.0));
                Point::new(center.x - preset.width / 2.0, center.y - preset.height / 2.0)
            }
        }
    }

    fn select(&mut self, id: ObjectId) -> Vec<Action> {
        if self.ui.selected_id == Some(id) {
            return Vec::new();
        }
        self.ui.selected_id = Some(id);
        if !self.config.preserve_object_stacking {
            self.doc.bring_to_front(&id);
        }
        vec![Action::SelectionChanged(Some(id))]
    }

    fn clear_selection(&mut self) -> Vec<Action> {
        if self.ui.selected_id.take().is_some() {
            vec![Action::SelectionChanged(None)]
        } else {
            Vec::new()
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Vec<Action> {
        if self.ui.cursor == cursor {
            return Vec::new();
        }
        self.ui.cursor = cursor;
        vec![Action::SetCursor(cursor)]
    }

    // --- Pointer ---

    /// Zoom about the cursor by `base ^ delta.dy`, clamped to the configured bounds.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        if !delta.dy.is_finite() {
            return Vec::new();
        }
        let zoom = self
            .config
            .clamp_zoom(self.camera.zoom * self.config.wheel_zoom_base.powf(delta.dy));
        self.camera.zoom_to_point(screen_pt, zoom);
        log::trace!("zoom {zoom:.3} about ({}, {})", screen_pt.x, screen_pt.y);
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        if self.ui.space_held {
            self.ui.selection_enabled = false;
            self.ui.marquee = None;
            self.input = InputState::Panning { last_screen: screen_pt };
            log::debug!("pan session started");
            return self.set_cursor(Cursor::Grabbing);
        }

        if !self.ui.selection_enabled {
            return Vec::new();
        }

        let world = self.camera.screen_to_world(screen_pt);
        let mut actions = Vec::new();
        match hit::hit_test(world, &self.doc, &self.camera, self.ui.selected_id) {
            Some(Hit { object_id, part: HitPart::ResizeHandle(anchor) }) => {
                if let Some(obj) = self.doc.get(&object_id) {
                    self.input = InputState::ResizingObject {
                        id: object_id,
                        anchor,
                        start_world: world,
                        orig_x: obj.x,
                        orig_y: obj.y,
                        orig_w: obj.width,
                        orig_h: obj.height,
                    };
                    actions.extend(self.set_cursor(Cursor::Resize(anchor)));
                }
            }
            Some(Hit { object_id, part: HitPart::Body }) if self.is_selectable(&object_id) => {
                actions.extend(self.select(object_id));
                self.input = InputState::DraggingObject { id: object_id, last_world: world };
                actions.extend(self.set_cursor(Cursor::Move));
                actions.push(Action::RenderNeeded);
            }
            _ => {
                actions.extend(self.clear_selection());
                self.input = InputState::Marquee { anchor_world: world };
                self.ui.marquee = Some(SelectionRect::from_corners(world, world));
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match self.input {
            InputState::Panning { last_screen } => {
                self.camera
                    .pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingObject { id, last_world } => {
                if let Some(obj) = self.doc.get_mut(&id) {
                    obj.x += world.x - last_world.x;
                    obj.y += world.y - last_world.y;
                }
                self.input = InputState::DraggingObject { id, last_world: world };
                vec![Action::RenderNeeded]
            }
            InputState::ResizingObject { id, anchor, start_world, orig_x, orig_y, orig_w, orig_h } => {
                if let Some(obj) = self.doc.get_mut(&id) {
                    let orig = Bounds { x: orig_x, y: orig_y, width: orig_w, height: orig_h };
                    let next = hit::resize_bounds(
                        orig,
                        anchor,
                        world.x - start_world.x,
                        world.y - start_world.y,
                    );
                    obj.x = next.x;
                    obj.y = next.y;
                    obj.width = next.width;
                    obj.height = next.height;
                }
                vec![Action::RenderNeeded]
            }
            InputState::Marquee { anchor_world } => {
                self.ui.marquee = Some(SelectionRect::from_corners(anchor_world, world));
                vec![Action::RenderNeeded]
            }
            InputState::Idle => {
                let cursor = self.hover_cursor(world);
                self.set_cursor(cursor)
            }
        }
    }

    /// End any gesture. A pan session always ends here, even if none was active.
    pub fn on_pointer_up(&mut self, screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();
        match std::mem::take(&mut self.input) {
            InputState::Marquee { anchor_world } => {
                let rect = SelectionRect::from_corners(anchor_world, self.camera.screen_to_world(screen_pt));
                self.ui.marquee = None;
                if let Some(id) = hit::topmost_in_rect(rect, &self.doc) {
                    actions.extend(self.select(id));
                }
                actions.push(Action::RenderNeeded);
            }
            InputState::Panning { .. } => log::debug!("pan session ended"),
            InputState::DraggingObject { .. } | InputState::ResizingObject { .. } => {
                actions.push(Action::RenderNeeded);
            }
            InputState::Idle => {}
        }

        self.ui.selection_enabled = true;
        self.ui.cursor = Cursor::Default;
        actions.push(Action::SetCursor(Cursor::Default));
        actions
    }

    fn is_selectable(&self, id: &ObjectId) -> bool {
        self.doc.get(id).is_some_and(|obj| obj.flags.selectable)
    }

    fn hover_cursor(&self, world: Point) -> Cursor {
        if self.ui.space_held {
            return Cursor::Grab;
        }
        match hit::hit_test(world, &self.doc, &self.camera, self.ui.selected_id) {
            Some(Hit { part: HitPart::ResizeHandle(anchor), .. }) => Cursor::Resize(anchor),
            Some(Hit { object_id, part: HitPart::Body }) if self.is_selectable(&object_id) => Cursor::Move,
            _ => Cursor::Default,
        }
    }

    // --- Keyboard ---

    /// Space arms panning; Delete/Backspace removes the active item unless
    /// the event came from a text field.
    pub fn on_key_down(&mut self, key: &Key, target: KeyTarget) -> Vec<Action> {
        if key.is_space() {
            self.ui.space_held = true;
            if self.input.is_panning() {
                return Vec::new();
            }
            return self.set_cursor(Cursor::Grab);
        }
        if key.is_delete() {
            if target == KeyTarget::TextEntry {
                return Vec::new();
            }
            return self.delete_active();
        }
        Vec::new()
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_space() {
            return Vec::new();
        }
        self.ui.space_held = false;
        if self.input.is_panning() {
            return Vec::new();
        }
        self.set_cursor(Cursor::Default)
    }

    // --- Queries ---

    /// The currently active furniture item, if any.
    #[must_use]
    pub fn active(&self) -> Option<ObjectId> {
        self.ui.selected_id
    }

    #[must_use]
    pub fn active_object(&self) -> Option<&SceneObject> {
        self.ui.selected_id.and_then(|id| self.doc.get(&id))
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.ui.cursor
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.doc.get(id)
    }

    #[must_use]
    pub fn object_count(&self) -> usize {
        self.doc.len()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.config.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.config.height
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Snapshot of the exportable objects (room and furniture) in draw order.
    #[must_use]
    pub fn export(&self) -> Vec<SceneObject> {
        self.doc.exportable().into_iter().cloned().collect()
    }
}

/// The full planner engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind a new surface to `canvas`, sizing its backing store from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::MissingContext`] if the element yields no 2D context.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: HtmlCanvasElement, config: PlannerConfig) -> Result<Self, SurfaceError> {
        canvas.set_width(config.width.round() as u32);
        canvas.set_height(config.height.round() as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::MissingContext)?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    // --- Delegated operations ---

    pub fn add_furniture(&mut self, kind: FurnitureKind) -> Vec<Action> {
        self.core.add_furniture(kind)
    }

    pub fn delete_active(&mut self) -> Vec<Action> {
        self.core.delete_active()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button, modifiers)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt, modifiers)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button, modifiers)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta, modifiers)
    }

    pub fn on_key_down(&mut self, key: &Key, target: KeyTarget) -> Vec<Action> {
        self.core.on_key_down(key, target)
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_up(key)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Js`] if a `Canvas2D` call throws.
    pub fn render(&self) -> Result<(), SurfaceError> {
        render::draw(&self.ctx, &self.core)?;
        Ok(())
    }

    /// Release the surface: clear the backing store and drop all scene state.
    pub fn dispose(self) {
        if let Err(err) = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0) {
            log::warn!("dispose: failed to reset transform: {err:?}");
        }
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        log::debug!("planner surface disposed ({} objects dropped)", self.core.object_count());
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn active(&self) -> Option<ObjectId> {
        self.core.active()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.core.object(id)
    }
}

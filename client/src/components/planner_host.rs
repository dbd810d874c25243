//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns interaction semantics and drawing. This host mounts
//! the engine once the `<canvas>` element exists, forwards pointer and wheel
//! events from the element and key events from the window, applies toolbar
//! placement requests, and coalesces redraws into one animation frame.
//!
//! LIFECYCLE
//! =========
//! Window listeners are `gloo_events::EventListener` guards held by the
//! session; a pending animation frame is tracked by id. Unmounting drops the
//! guards, cancels the frame, and disposes the engine, so mount/unmount cycles
//! leave nothing behind.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::{Rc, Weak};

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine, EngineCore};
#[cfg(feature = "csr")]
use canvas::input::{Key, WheelDelta};
#[cfg(feature = "csr")]
use gloo_events::EventListener;
#[cfg(feature = "csr")]
use js_sys::Date;
#[cfg(feature = "csr")]
use send_wrapper::SendWrapper;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "csr")]
use web_sys::HtmlCanvasElement;

#[cfg(feature = "csr")]
use crate::state::planner_view::PlannerViewState;
#[cfg(feature = "csr")]
use crate::state::ui::PlannerUiState;
#[cfg(feature = "csr")]
use crate::util::page_config::read_page_config;
#[cfg(feature = "csr")]
use crate::util::planner_input::{
    key_target, map_button, map_modifiers, pointer_point, should_prevent_default_key, wheel_point,
};

/// At most one outstanding `requestAnimationFrame` callback.
#[cfg(feature = "csr")]
#[derive(Default)]
struct FrameScheduler {
    request_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

#[cfg(feature = "csr")]
impl FrameScheduler {
    fn is_pending(&self) -> bool {
        self.request_id.get().is_some()
    }

    fn cancel(&self) {
        if let Some(id) = self.request_id.take()
            && let Some(window) = web_sys::window()
            && let Err(err) = window.cancel_animation_frame(id)
        {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
        self.callback.borrow_mut().take();
    }
}

/// Everything one mounted planner owns.
#[cfg(feature = "csr")]
#[derive(Clone)]
struct PlannerSession {
    engine: Rc<RefCell<Option<Engine>>>,
    frames: Rc<FrameScheduler>,
    listeners: Rc<RefCell<Vec<EventListener>>>,
    view: RwSignal<PlannerViewState>,
}

#[cfg(feature = "csr")]
struct WeakSession {
    engine: Weak<RefCell<Option<Engine>>>,
    frames: Weak<FrameScheduler>,
    listeners: Weak<RefCell<Vec<EventListener>>>,
    view: RwSignal<PlannerViewState>,
}

#[cfg(feature = "csr")]
impl WeakSession {
    fn upgrade(&self) -> Option<PlannerSession> {
        Some(PlannerSession {
            engine: self.engine.upgrade()?,
            frames: self.frames.upgrade()?,
            listeners: self.listeners.upgrade()?,
            view: self.view,
        })
    }
}

#[cfg(feature = "csr")]
impl PlannerSession {
    fn new(view: RwSignal<PlannerViewState>) -> Self {
        Self {
            engine: Rc::new(RefCell::new(None)),
            frames: Rc::new(FrameScheduler::default()),
            listeners: Rc::new(RefCell::new(Vec::new())),
            view,
        }
    }

    fn downgrade(&self) -> WeakSession {
        WeakSession {
            engine: Rc::downgrade(&self.engine),
            frames: Rc::downgrade(&self.frames),
            listeners: Rc::downgrade(&self.listeners),
            view: self.view,
        }
    }

    fn is_mounted(&self) -> bool {
        self.engine.borrow().is_some()
    }

    fn mount(&self, canvas: HtmlCanvasElement) {
        if self.is_mounted() {
            return;
        }
        let engine = match Engine::new(canvas, read_page_config()) {
            Ok(engine) => engine,
            Err(err) => {
                log::warn!("planner surface not mounted: {err}");
                return;
            }
        };
        self.publish(&engine.core);
        *self.engine.borrow_mut() = Some(engine);
        self.install_key_listeners();
        self.request_render();
        log::debug!("planner host mounted");
    }

    /// Space and Delete/Backspace are handled wherever focus is, so they
    /// listen on the window rather than the canvas. Losing window focus
    /// releases Space, since its keyup will never arrive.
    fn install_key_listeners(&self) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window; keyboard shortcuts disabled");
            return;
        };
        let mut listeners = self.listeners.borrow_mut();

        let weak = self.downgrade();
        listeners.push(EventListener::new(&window, "keydown", move |event| {
            let Some(ev) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let Some(session) = weak.upgrade() else {
                return;
            };
            let key = Key(ev.code());
            let target = key_target(event);
            if should_prevent_default_key(&key.0, target) {
                ev.prevent_default();
            }
            session.dispatch(|engine| engine.on_key_down(&key, target));
        }));

        let weak = self.downgrade();
        listeners.push(EventListener::new(&window, "keyup", move |event| {
            let Some(ev) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let Some(session) = weak.upgrade() else {
                return;
            };
            let key = Key(ev.code());
            if should_prevent_default_key(&key.0, key_target(event)) {
                ev.prevent_default();
            }
            session.dispatch(|engine| engine.on_key_up(&key));
        }));

        let weak = self.downgrade();
        listeners.push(EventListener::new(&window, "blur", move |_| {
            let Some(session) = weak.upgrade() else {
                return;
            };
            let key = Key("Space".to_owned());
            session.dispatch(|engine| engine.on_key_up(&key));
        }));
    }

    /// Run one engine operation, apply its actions, and publish telemetry.
    fn dispatch<F>(&self, op: F)
    where
        F: FnOnce(&mut Engine) -> Vec<Action>,
    {
        let needs_render = {
            let Ok(mut slot) = self.engine.try_borrow_mut() else {
                log::warn!("planner event dropped: engine busy");
                return;
            };
            let Some(engine) = slot.as_mut() else {
                return;
            };
            let actions = op(engine);
            let needs_render = apply_actions(engine, &actions);
            self.publish(&engine.core);
            needs_render
        };
        if needs_render {
            self.request_render();
        }
    }

    fn apply_placements(&self, ui: RwSignal<PlannerUiState>) {
        if !self.is_mounted() || !ui.with_untracked(PlannerUiState::has_pending_placements) {
            return;
        }
        let kinds = ui
            .try_update_untracked(PlannerUiState::take_placements)
            .unwrap_or_default();
        for kind in kinds {
            self.dispatch(|engine| engine.add_furniture(kind));
        }
    }

    fn publish(&self, core: &EngineCore) {
        let current = self.view.get_untracked();
        let mut next = current.clone();
        next.sync(core);
        if next != current {
            self.view.set(next);
        }
    }

    fn request_render(&self) {
        if self.frames.is_pending() {
            return;
        }
        let Some(window) = web_sys::window() else {
            render_and_track(&self.engine, self.view);
            return;
        };

        let weak = self.downgrade();
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(session) = weak.upgrade() {
                session.frames.request_id.set(None);
                render_and_track(&session.engine, session.view);
            }
        }) as Box<dyn FnMut(f64)>);

        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.frames.request_id.set(Some(id));
                *self.frames.callback.borrow_mut() = Some(cb);
            }
            Err(err) => {
                log::warn!("requestAnimationFrame failed, rendering now: {err:?}");
                render_and_track(&self.engine, self.view);
            }
        }
    }

    fn teardown(&self) {
        self.listeners.borrow_mut().clear();
        self.frames.cancel();
        match self.engine.try_borrow_mut() {
            Ok(mut slot) => {
                if let Some(engine) = slot.take() {
                    engine.dispose();
                }
            }
            Err(_) => log::warn!("planner teardown while engine busy"),
        }
        self.view.try_update(|v| v.mounted = false);
        log::debug!("planner host unmounted");
    }
}

/// Apply host-side effects. Returns whether a redraw was requested.
#[cfg(feature = "csr")]
fn apply_actions(engine: &Engine, actions: &[Action]) -> bool {
    let mut needs_render = false;
    for action in actions {
        match action {
            Action::RenderNeeded => needs_render = true,
            Action::SetCursor(cursor) => {
                if let Err(err) = engine.canvas().style().set_property("cursor", cursor.css()) {
                    log::warn!("failed to set cursor: {err:?}");
                }
            }
            Action::ObjectCreated(_) | Action::ObjectDeleted { .. } | Action::SelectionChanged(_) => {}
        }
    }
    needs_render
}

#[cfg(feature = "csr")]
fn render_and_track(engine: &RefCell<Option<Engine>>, view: RwSignal<PlannerViewState>) {
    let Ok(slot) = engine.try_borrow() else {
        log::warn!("render skipped: engine busy");
        return;
    };
    let Some(engine) = slot.as_ref() else {
        return;
    };
    let started_ms = Date::now();
    if let Err(err) = engine.render() {
        log::warn!("planner render failed: {err}");
        return;
    }
    let elapsed_ms = (Date::now() - started_ms).max(0.0);
    view.try_update(|v| v.last_render_ms = Some(elapsed_ms));
}

/// Planner host component.
///
/// Mounts `canvas::engine::Engine` on its `<canvas>`, applies placement
/// requests from [`crate::state::ui::PlannerUiState`], and keeps
/// [`crate::state::planner_view::PlannerViewState`] current.
#[component]
pub fn PlannerHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let session = PlannerSession::new(expect_context::<RwSignal<PlannerViewState>>());
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<PlannerUiState>>();

    #[cfg(feature = "csr")]
    {
        let session = session.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            session.mount(canvas);
            session.apply_placements(ui);
        });
    }

    #[cfg(feature = "csr")]
    {
        let session = session.clone();
        Effect::new(move || {
            ui.with(|u| u.placement_seq);
            session.apply_placements(ui);
        });
    }

    #[cfg(feature = "csr")]
    {
        let session = SendWrapper::new(session.clone());
        on_cleanup(move || session.teardown());
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get()
                    && let Err(err) = canvas.set_pointer_capture(ev.pointer_id())
                {
                    log::trace!("pointer capture unavailable: {err:?}");
                }
                let point = pointer_point(&ev);
                let button = map_button(ev.button());
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                session.dispatch(|engine| engine.on_pointer_down(point, button, modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                session.dispatch(|engine| engine.on_pointer_move(point, modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get()
                    && canvas.has_pointer_capture(ev.pointer_id())
                    && let Err(err) = canvas.release_pointer_capture(ev.pointer_id())
                {
                    log::trace!("pointer release failed: {err:?}");
                }
                let point = pointer_point(&ev);
                let button = map_button(ev.button());
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                session.dispatch(|engine| engine.on_pointer_up(point, button, modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };
    let on_pointer_cancel = on_pointer_up.clone();

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let session = session.clone();
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                let point = wheel_point(&ev);
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                session.dispatch(|engine| engine.on_wheel(point, delta, modifiers));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <canvas
            id="planner-canvas"
            class="planner-host"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:wheel=on_wheel
            on:contextmenu=|ev: leptos::ev::MouseEvent| ev.prevent_default()
        >
            "Your browser does not support canvas."
        </canvas>
    }
}

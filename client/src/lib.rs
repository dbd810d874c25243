//! Leptos front end for the room planner.
//!
//! The page is a sidebar (furniture toolbar and usage tip) next to the planner
//! surface. [`components::planner_host::PlannerHost`] owns the
//! `canvas::engine::Engine` and bridges DOM events into it; everything else
//! reads shared state from context.
//!
//! Browser wiring is behind the `csr` feature so the pure helpers and state
//! types build and test natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}

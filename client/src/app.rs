//! Root application component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the shared state signals and lays out the page: the furniture
//! sidebar on the left, the planner surface and its status bar on the right.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::furniture_toolbar::FurnitureToolbar;
use crate::components::planner_host::PlannerHost;
use crate::components::status_bar::StatusBar;
use crate::state::planner_view::PlannerViewState;
use crate::state::ui::PlannerUiState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(PlannerUiState::default()));
    provide_context(RwSignal::new(PlannerViewState::default()));

    view! {
        <Title text="Room Planner"/>
        <main class="planner-page">
            <aside class="planner-page__sidebar">
                <h1 class="planner-page__heading">"Furniture"</h1>
                <FurnitureToolbar/>
                <p class="planner-page__tip">
                    "Tip: Hold " <b>"Space"</b> " to pan, scroll to zoom."
                </p>
            </aside>
            <section class="planner-page__surface">
                <PlannerHost/>
                <StatusBar/>
            </section>
        </main>
    }
}

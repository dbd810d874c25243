//! Sidebar buttons that add furniture to the planner.
//!
//! Each button keeps the DOM id of its furniture kind (`add-sofa`,
//! `add-table`, `add-chair`) and queues a placement request on click.

use leptos::prelude::*;

use canvas::furniture::FurnitureKind;

use crate::state::ui::PlannerUiState;

/// One "Add <kind>" button per furniture kind.
#[component]
pub fn FurnitureToolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<PlannerUiState>>();

    view! {
        <div class="furniture-toolbar">
            {FurnitureKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <button
                            id=kind.control_id()
                            class="btn furniture-toolbar__button"
                            on:click=move |_| ui.update(|u| u.request_placement(kind))
                        >
                            {format!("Add {}", kind.label())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

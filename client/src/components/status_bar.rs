//! Bottom status bar showing planner telemetry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders low-frequency planner state (zoom, item count, active item, pan
//! mode) so users can see what the surface is doing without inspecting it.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use canvas::furniture::FurnitureKind;

use crate::state::planner_view::PlannerViewState;

/// Status bar under the planner surface.
#[component]
pub fn StatusBar() -> impl IntoView {
    let view_state = expect_context::<RwSignal<PlannerViewState>>();

    let zoom = move || format_zoom(view_state.get().zoom);
    let items = move || format_item_count(view_state.get().furniture_count);
    let active = move || format_active(view_state.get().active);
    let mode = move || {
        let state = view_state.get();
        pan_mode_label(state.space_held, state.panning)
    };
    let render_ms = move || format_render_ms(view_state.get().last_render_ms);

    view! {
        <div class="status-bar">
            <div class="status-bar__section">
                <span class="status-bar__item">{zoom}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{items}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{active}</span>
            </div>
            <div class="status-bar__section">
                <span class="status-bar__item">{mode}</span>
                <span class="status-bar__divider"></span>
                <span class="status-bar__item">{render_ms}</span>
            </div>
        </div>
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_zoom(zoom: f64) -> String {
    format!("{}%", (zoom * 100.0).round() as i64)
}

fn format_item_count(count: usize) -> String {
    match count {
        1 => "1 item".to_owned(),
        n => format!("{n} items"),
    }
}

fn format_active(active: Option<FurnitureKind>) -> String {
    active.map_or_else(|| "nothing selected".to_owned(), |kind| format!("{} selected", kind.label()))
}

fn pan_mode_label(space_held: bool, panning: bool) -> &'static str {
    if panning {
        "PANNING"
    } else if space_held {
        "PAN READY"
    } else {
        "SELECT"
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_render_ms(ms: Option<f64>) -> String {
    match ms {
        Some(value) => format!("render {}ms", value.round() as i64),
        None => "render --ms".to_owned(),
    }
}

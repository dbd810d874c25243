//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ui` carries requests from page chrome into the planner host; `planner_view`
//! carries telemetry from the host back out to the chrome. Neither holds the
//! scene itself, which lives in the engine.

pub mod planner_view;
pub mod ui;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render planner chrome and the interaction surface while
//! reading/writing shared state from Leptos context providers.

pub mod furniture_toolbar;
pub mod planner_host;
pub mod status_bar;

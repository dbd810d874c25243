#![allow(clippy::float_cmp)]

use canvas::camera::Point;
use canvas::config::PlannerConfig;
use canvas::input::{Button, Key, KeyTarget, Modifiers};

use super::*;

#[test]
fn planner_view_state_defaults_are_neutral() {
    let state = PlannerViewState::default();
    assert!(!state.mounted);
    assert_eq!(state.zoom, 1.0);
    assert_eq!((state.pan_x, state.pan_y), (0.0, 0.0));
    assert_eq!(state.object_count, 0);
    assert_eq!(state.furniture_count, 0);
    assert!(state.active.is_none());
    assert!(!state.space_held);
    assert!(!state.panning);
    assert!(state.last_render_ms.is_none());
}

#[test]
fn sync_reads_seeded_engine() {
    let core = EngineCore::new(PlannerConfig::default());
    let mut state = PlannerViewState::default();
    state.sync(&core);
    assert!(state.mounted);
    assert_eq!(state.object_count, 43);
    assert_eq!(state.furniture_count, 0);
    assert!(state.active.is_none());
}

#[test]
fn sync_tracks_active_kind_and_counts() {
    let mut core = EngineCore::new(PlannerConfig::default());
    core.add_furniture(FurnitureKind::Sofa);
    core.add_furniture(FurnitureKind::Chair);
    let mut state = PlannerViewState::default();
    state.sync(&core);
    assert_eq!(state.furniture_count, 2);
    assert_eq!(state.active, Some(FurnitureKind::Chair));

    core.delete_active();
    state.sync(&core);
    assert_eq!(state.furniture_count, 1);
    assert!(state.active.is_none());
}

#[test]
fn sync_tracks_pan_session() {
    let mut core = EngineCore::new(PlannerConfig::default());
    core.on_key_down(&Key("Space".to_owned()), KeyTarget::Surface);
    core.on_pointer_down(Point::new(10.0, 10.0), Button::Primary, Modifiers::default());
    core.on_pointer_move(Point::new(30.0, 15.0), Modifiers::default());

    let mut state = PlannerViewState::default();
    state.sync(&core);
    assert!(state.space_held);
    assert!(state.panning);
    assert_eq!((state.pan_x, state.pan_y), (20.0, 5.0));
}

#[test]
fn sync_keeps_render_timing() {
    let core = EngineCore::new(PlannerConfig::default());
    let mut state = PlannerViewState { last_render_ms: Some(2.5), ..PlannerViewState::default() };
    state.sync(&core);
    assert_eq!(state.last_render_ms, Some(2.5));
}

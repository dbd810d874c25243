//! End-to-end sessions driven through the public `EngineCore` API, the way
//! the page host drives it.
#![allow(clippy::float_cmp)]

use canvas::camera::Point;
use canvas::config::PlannerConfig;
use canvas::doc::ObjectKind;
use canvas::engine::{Action, EngineCore};
use canvas::furniture::FurnitureKind;
use canvas::input::{Button, Cursor, Key, KeyTarget, Modifiers, WheelDelta};

const SEEDED: usize = 25 + 17 + 1;

fn press(core: &mut EngineCore, code: &str) -> Vec<Action> {
    core.on_key_down(&Key(code.to_owned()), KeyTarget::Surface)
}

fn release(core: &mut EngineCore, code: &str) -> Vec<Action> {
    core.on_key_up(&Key(code.to_owned()))
}

#[test]
fn toolbar_then_backspace_session() {
    let mut core = EngineCore::new(PlannerConfig::default());
    assert_eq!(core.object_count(), SEEDED);

    core.on_control_click("add-sofa");
    let sofa = core.active().unwrap();
    core.on_control_click("add-chair");
    let chair = core.active().unwrap();
    assert_eq!(core.object_count(), SEEDED + 2);

    press(&mut core, "Backspace");
    assert_eq!(core.object_count(), SEEDED + 1);
    assert!(core.object(&chair).is_none());
    assert_eq!(core.object(&sofa).unwrap().kind, ObjectKind::Furniture(FurnitureKind::Sofa));
    assert!(core.active().is_none());
}

#[test]
fn every_control_adds_its_preset() {
    let mut core = EngineCore::new(PlannerConfig::default());
    for kind in FurnitureKind::ALL {
        core.on_control_click(kind.control_id());
        let obj = core.object(&core.active().unwrap()).unwrap();
        let preset = kind.preset();
        assert_eq!((obj.width, obj.height), (preset.width, preset.height));
    }
    assert_eq!(core.doc.furniture_count(), FurnitureKind::ALL.len());
    assert_eq!(core.object_count(), SEEDED + 3);
}

#[test]
fn zoom_then_pan_then_place() {
    let mut core = EngineCore::new(PlannerConfig::default());
    let mods = Modifiers::default();

    core.on_wheel(Point::new(400.0, 300.0), WheelDelta { dx: 0.0, dy: -500.0 }, mods);
    let zoom = core.camera().zoom;
    assert!(zoom > 1.0 && zoom <= 3.0);

    assert_eq!(press(&mut core, "Space"), vec![Action::SetCursor(Cursor::Grab)]);
    core.on_pointer_down(Point::new(200.0, 200.0), Button::Primary, mods);
    let before = core.camera();
    core.on_pointer_move(Point::new(150.0, 260.0), mods);
    let after = core.camera();
    assert!((after.pan_x - before.pan_x + 50.0).abs() < 1e-9);
    assert!((after.pan_y - before.pan_y - 60.0).abs() < 1e-9);
    assert_eq!(after.zoom, zoom);

    core.on_pointer_up(Point::new(150.0, 260.0), Button::Primary, mods);
    release(&mut core, "Space");
    assert_eq!(core.cursor(), Cursor::Default);

    // Fixed placement is in world space, independent of the camera.
    core.on_control_click("add-table");
    let table = core.object(&core.active().unwrap()).unwrap();
    assert_eq!((table.x, table.y), (450.0, 300.0));
}

#[test]
fn config_json_drives_seeding() {
    let config = PlannerConfig::from_json(r#"{"width": 400, "height": 200, "grid_spacing": 100}"#).unwrap();
    let core = EngineCore::new(config);
    assert_eq!(core.doc.count_kind(ObjectKind::GridLine), 5 + 3);
    assert_eq!(core.doc.count_kind(ObjectKind::Room), 1);
}

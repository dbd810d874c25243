#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn sofa_preset_is_rounded() {
    let p = FurnitureKind::Sofa.preset();
    assert_eq!(p.width, 180.0);
    assert_eq!(p.height, 80.0);
    assert_eq!(p.corner_radius, 10.0);
}

#[test]
fn table_preset_is_square() {
    let p = FurnitureKind::Table.preset();
    assert_eq!((p.width, p.height, p.corner_radius), (120.0, 120.0, 0.0));
}

#[test]
fn chair_preset_is_square() {
    let p = FurnitureKind::Chair.preset();
    assert_eq!((p.width, p.height, p.corner_radius), (60.0, 60.0, 0.0));
}

#[test]
fn control_ids_resolve_back_to_kind() {
    for kind in FurnitureKind::ALL {
        assert_eq!(FurnitureKind::from_control_id(kind.control_id()), Some(kind));
    }
}

#[test]
fn control_ids_are_literal() {
    assert_eq!(FurnitureKind::Sofa.control_id(), "add-sofa");
    assert_eq!(FurnitureKind::Table.control_id(), "add-table");
    assert_eq!(FurnitureKind::Chair.control_id(), "add-chair");
}

#[test]
fn unknown_control_id_is_none() {
    assert_eq!(FurnitureKind::from_control_id("add-bed"), None);
    assert_eq!(FurnitureKind::from_control_id(""), None);
    assert_eq!(FurnitureKind::from_control_id("ADD-SOFA"), None);
}

#[test]
fn kind_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&FurnitureKind::Sofa).unwrap(), "\"sofa\"");
    let back: FurnitureKind = serde_json::from_str("\"chair\"").unwrap();
    assert_eq!(back, FurnitureKind::Chair);
}

#[test]
fn labels_are_capitalized() {
    let labels: Vec<_> = FurnitureKind::ALL.iter().map(|k| k.label()).collect();
    assert_eq!(labels, ["Sofa", "Table", "Chair"]);
}

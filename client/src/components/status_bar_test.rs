use super::*;

#[test]
fn format_zoom_rounds_to_percent() {
    assert_eq!(format_zoom(1.0), "100%");
    assert_eq!(format_zoom(0.4), "40%");
    assert_eq!(format_zoom(1.10517), "111%");
}

#[test]
fn format_item_count_pluralizes() {
    assert_eq!(format_item_count(0), "0 items");
    assert_eq!(format_item_count(1), "1 item");
    assert_eq!(format_item_count(3), "3 items");
}

#[test]
fn format_active_names_kind() {
    assert_eq!(format_active(None), "nothing selected");
    assert_eq!(format_active(Some(FurnitureKind::Sofa)), "Sofa selected");
}

#[test]
fn pan_mode_prefers_active_session() {
    assert_eq!(pan_mode_label(false, false), "SELECT");
    assert_eq!(pan_mode_label(true, false), "PAN READY");
    assert_eq!(pan_mode_label(true, true), "PANNING");
    // Space released mid-drag: the session continues until pointer-up.
    assert_eq!(pan_mode_label(false, true), "PANNING");
}

#[test]
fn format_render_ms_handles_missing_sample() {
    assert_eq!(format_render_ms(None), "render --ms");
    assert_eq!(format_render_ms(Some(3.6)), "render 4ms");
}

//! Planner input mapping: DOM events to engine input types.

#[cfg(test)]
#[path = "planner_input_test.rs"]
mod planner_input_test;

use canvas::input::{Button, KeyTarget, Modifiers};

#[cfg(feature = "csr")]
use canvas::camera::Point;

/// Map a DOM `MouseEvent.button` value.
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Classify a key event's target element. Text inputs, text areas, selects,
/// and content-editable elements swallow planner shortcuts.
pub fn classify_key_target(tag_name: &str, content_editable: bool) -> KeyTarget {
    if content_editable {
        return KeyTarget::TextEntry;
    }
    if ["INPUT", "TEXTAREA", "SELECT"]
        .iter()
        .any(|tag| tag_name.eq_ignore_ascii_case(tag))
    {
        KeyTarget::TextEntry
    } else {
        KeyTarget::Surface
    }
}

/// Space outside text fields must not scroll the page or activate the
/// focused button.
pub fn should_prevent_default_key(code: &str, target: KeyTarget) -> bool {
    code == "Space" && target != KeyTarget::TextEntry
}

#[cfg(feature = "csr")]
pub fn key_target(ev: &web_sys::Event) -> KeyTarget {
    use wasm_bindgen::JsCast;

    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        .map_or(KeyTarget::Surface, |el| classify_key_target(&el.tag_name(), el.is_content_editable()))
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "csr")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

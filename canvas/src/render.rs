//! Rendering: draws the planner scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels; it never mutates application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::{ObjectKind, SceneObject};
use crate::engine::EngineCore;
use crate::hit;
use crate::input::SelectionRect;

/// Selection dash segment length in screen pixels.
const SELECTION_DASH_PX: f64 = 4.0;

const SELECTION_STROKE: &str = "#1E90FF";

/// Draw the full scene: background, objects in stacking order, selection UI.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let config = core.config();
    let camera = core.camera();

    // Layer 1: background in screen space.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, config.width, config.height);
    ctx.set_fill_style_str(&config.background);
    ctx.fill_rect(0.0, 0.0, config.width, config.height);

    // Layer 2: objects in world space, bottom first.
    ctx.set_transform(camera.zoom, 0.0, 0.0, camera.zoom, camera.pan_x, camera.pan_y)?;
    for obj in core.doc.sorted_objects() {
        draw_object(ctx, obj)?;
    }

    // Layer 3: selection UI.
    if let Some(obj) = core.active_object() {
        draw_selection(ctx, obj, camera.zoom);
    }
    if let Some(m) = core.ui.marquee {
        draw_marquee(ctx, m, camera.zoom)?;
    }

    Ok(())
}

fn draw_object(ctx: &CanvasRenderingContext2d, obj: &SceneObject) -> Result<(), JsValue> {
    match obj.kind {
        ObjectKind::GridLine => {
            draw_line(ctx, obj);
            Ok(())
        }
        ObjectKind::Room | ObjectKind::Furniture(_) => draw_rect(ctx, obj),
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, obj: &SceneObject) {
    ctx.begin_path();
    ctx.move_to(obj.x, obj.y);
    ctx.line_to(obj.x + obj.width, obj.y + obj.height);
    apply_stroke_style(ctx, obj);
    ctx.stroke();
}

fn draw_rect(ctx: &CanvasRenderingContext2d, obj: &SceneObject) -> Result<(), JsValue> {
    if obj.corner_radius > 0.0 {
        rounded_rect_path(ctx, obj.x, obj.y, obj.width, obj.height, obj.corner_radius)?;
    } else {
        ctx.begin_path();
        ctx.rect(obj.x, obj.y, obj.width, obj.height);
    }

    if let Some(fill) = &obj.style.fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    apply_stroke_style(ctx, obj);
    ctx.stroke();
    Ok(())
}

/// Trace a rounded rectangle. The radius shrinks to fit small boxes.
fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) -> Result<(), JsValue> {
    let r = r.min(w / 2.0).min(h / 2.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(x + w, y, x + w, y + h, r)?;
    ctx.arc_to(x + w, y + h, x, y + h, r)?;
    ctx.arc_to(x, y + h, x, y, r)?;
    ctx.arc_to(x, y, x + w, y, r)?;
    ctx.close_path();
    Ok(())
}

// =============================================================
// Selection UI
// =============================================================

fn draw_selection(ctx: &CanvasRenderingContext2d, obj: &SceneObject, zoom: f64) {
    ctx.save();
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(1.0 / zoom);
    ctx.stroke_rect(obj.x, obj.y, obj.width, obj.height);

    let half = HANDLE_RADIUS_PX / zoom / 2.0;
    ctx.set_fill_style_str("#fff");
    for pt in hit::resize_handle_positions(obj.x, obj.y, obj.width, obj.height) {
        ctx.fill_rect(pt.x - half, pt.y - half, half * 2.0, half * 2.0);
        ctx.stroke_rect(pt.x - half, pt.y - half, half * 2.0, half * 2.0);
    }

    ctx.restore();
}

fn draw_marquee(ctx: &CanvasRenderingContext2d, marquee: SelectionRect, zoom: f64) -> Result<(), JsValue> {
    ctx.save();
    let dash_world = SELECTION_DASH_PX / zoom;
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash_world.into());
    dash_array.push(&dash_world.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_fill_style_str("rgba(30, 144, 255, 0.12)");
    ctx.set_line_width(1.0 / zoom);
    ctx.fill_rect(marquee.x, marquee.y, marquee.width, marquee.height);
    ctx.stroke_rect(marquee.x, marquee.y, marquee.width, marquee.height);
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, obj: &SceneObject) {
    ctx.set_stroke_style_str(&obj.style.stroke);
    ctx.set_line_width(obj.style.stroke_width);
}

//! Error types for configuration and surface setup.
//!
//! None of these reach the user: the host logs them and degrades (defaults
//! for a bad config, an empty page for a missing surface).

use wasm_bindgen::JsValue;

/// Rejected planner configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The raw text is not valid JSON for [`crate::config::PlannerConfig`].
    #[error("failed to parse planner config: {0}")]
    Parse(#[from] serde_json::Error),
    /// Surface width or height is not a positive finite number.
    #[error("invalid surface size {width}x{height}")]
    InvalidSurfaceSize { width: f64, height: f64 },
    /// Grid spacing is not a positive finite number.
    #[error("invalid grid spacing {0}")]
    InvalidGridSpacing(f64),
    /// Zoom bounds are not `0 < min <= max`.
    #[error("invalid zoom range [{min}, {max}]")]
    InvalidZoomRange { min: f64, max: f64 },
    /// Wheel base is outside the open interval (0, 1).
    #[error("invalid wheel zoom base {0}")]
    InvalidWheelBase(f64),
}

/// Failure while binding to or drawing on the browser canvas.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The canvas element did not yield a 2D rendering context.
    #[error("canvas has no 2d rendering context")]
    MissingContext,
    /// A browser API call threw.
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

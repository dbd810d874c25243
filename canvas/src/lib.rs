//! Canvas surface and input engine for the room planner.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! planner surface: seeding the grid and room outline, translating raw DOM
//! input events into scene mutations, maintaining camera state for pan/zoom,
//! hit-testing furniture, and rendering the scene. The host page is
//! responsible only for wiring DOM events to the engine and reacting to the
//! resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Scene object types and the in-memory store |
//! | [`furniture`] | Furniture types, presets, and toolbar control ids |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing, marquee picking, and resize geometry |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`config`] | Host-supplied settings with defaults and validation |
//! | [`error`] | Config and surface error types |
//! | [`consts`] | Shared constants (surface size, zoom limits, colors) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod furniture;
pub mod hit;
pub mod input;
pub mod render;

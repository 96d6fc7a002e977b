//! Edge-snapping line editor for a square canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The user
//! drags a line between two points on the square's edges; both endpoints snap
//! to the nearest edge, the line is previewed as it moves, and on release the
//! endpoints are rescaled into the scorer's logical grid and posted to
//! `/api/calculate`. The host page only has to provide the two elements named
//! in [`consts`] and call `startEditor()`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geom`] | Points, canvas bounds, and edge snapping |
//! | [`input`] | Drag state machine and UI state |
//! | [`payload`] | Scorer wire types and pixel-to-logical rescaling |
//! | [`submit`] | HTTP call to the scorer |
//! | [`render`] | Canvas 2D drawing |
//! | [`web`] | DOM wiring and the `startEditor` export |
//! | [`consts`] | Thresholds, styling, messages, element ids |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod payload;
pub mod render;
pub mod submit;
pub mod web;

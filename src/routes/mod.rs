//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page and the compiled editor are static files. `/` serves
//! `index.html`, `/static` the rest of the directory, and `/pkg` the
//! wasm-pack output. The only API route is `/api/calculate`, which validates
//! the line and forwards it to the configured scorer.

pub mod calculate;

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/api/calculate", post(calculate::calculate))
        .route("/healthz", get(healthz))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest_service("/pkg", ServeDir::new(static_dir.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

//! `POST /api/calculate`: validate a line and forward it to the scorer.
//!
//! Rejections use the `{"detail": ...}` body shape the scorer itself uses
//! for errors, so the browser sees one format either way.

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use canvas::payload::LinePayload;

use crate::scorer::ScorerReply;
use crate::state::AppState;

/// Validate `payload` and relay the scorer's answer.
///
/// - 400 when a coordinate is outside `[0, 2024]` or an endpoint is off the perimeter
/// - 503 when no scorer is configured
/// - 502 when the scorer cannot be reached
pub async fn calculate(State(state): State<AppState>, Json(payload): Json<LinePayload>) -> Response {
    if let Err(err) = payload.validate() {
        tracing::debug!(?payload, error = %err, "rejecting line");
        return error_response(StatusCode::BAD_REQUEST, &err.to_string());
    }

    let Some(scorer) = state.scorer.as_ref() else {
        tracing::warn!("calculate requested but no scorer is configured");
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Scoring service not configured");
    };

    match scorer.calculate(&payload).await {
        Ok(reply) => {
            tracing::info!(?payload, status = reply.status, "scored line");
            relay(reply)
        }
        Err(e) => {
            tracing::warn!(error = %e, endpoint = scorer.endpoint(), "scorer request failed");
            error_response(StatusCode::BAD_GATEWAY, "Scoring service unavailable")
        }
    }
}

fn relay(reply: ScorerReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}

fn error_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}

#[cfg(test)]
#[path = "calculate_test.rs"]
mod tests;

//! Scoring request via `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure, whether transport, body encoding, or JSON decoding,
//! collapses into [`SubmitError`]. The engine shows one generic message for
//! all of them; the variant only feeds the console log.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::payload::{LinePayload, ScoreResponse};

/// Path of the scoring endpoint, relative to the page origin.
pub const CALCULATE_ENDPOINT: &str = "/api/calculate";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),
    /// The response body was not a JSON object.
    #[error("response decode failed: {0}")]
    Decode(String),
}

/// Post `payload` to the scorer and decode its reply.
///
/// Any HTTP status is accepted as long as the body decodes.
///
/// # Errors
///
/// Returns [`SubmitError`] on transport or decoding failure.
pub async fn submit_line(payload: &LinePayload) -> Result<ScoreResponse, SubmitError> {
    let request = gloo_net::http::Request::post(CALCULATE_ENDPOINT).json(payload).map_err(sending_error)?;
    let response = request.send().await.map_err(sending_error)?;
    log::debug!("scorer replied with status {}", response.status());
    response.json::<ScoreResponse>().await.map_err(reading_error)
}

/// Anything that fails before a response arrives is a request failure.
fn sending_error(err: gloo_net::Error) -> SubmitError {
    SubmitError::Request(err.to_string())
}

/// Reading the body can fail in transit or in JSON decoding; only the latter is `Decode`.
fn reading_error(err: gloo_net::Error) -> SubmitError {
    match err {
        gloo_net::Error::SerdeError(e) => SubmitError::Decode(e.to_string()),
        other => SubmitError::Request(other.to_string()),
    }
}

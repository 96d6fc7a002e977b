//! Upstream scoring service client.
//!
//! Thin HTTP wrapper for `POST {SCORER_URL}/api/calculate`. The host does not
//! interpret the scorer's answer; status and body are relayed to the browser
//! unchanged.

use std::time::Duration;

use canvas::payload::LinePayload;

use crate::config::ScorerTimeouts;

const CALCULATE_PATH: &str = "/api/calculate";

#[derive(Debug, thiserror::Error)]
pub enum ScorerError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the scorer failed or its body could not be read.
    #[error("scorer request failed: {0}")]
    Request(String),
}

/// Raw upstream answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerReply {
    pub status: u16,
    pub body: String,
}

pub struct ScorerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ScorerClient {
    /// Build a client for the scorer at `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: ScorerTimeouts) -> Result<Self, ScorerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ScorerError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: calculate_url(base_url) })
    }

    /// Full URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward `payload` and return whatever the scorer answered.
    ///
    /// # Errors
    ///
    /// Returns an error on connect failure, timeout, or unreadable body.
    pub async fn calculate(&self, payload: &LinePayload) -> Result<ScorerReply, ScorerError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| ScorerError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ScorerError::Request(e.to_string()))?;
        Ok(ScorerReply { status, body })
    }
}

fn calculate_url(base_url: &str) -> String {
    format!("{}{CALCULATE_PATH}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;

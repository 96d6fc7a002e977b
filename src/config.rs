//! Host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SCORER_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SCORER_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Directory holding `index.html` and the compiled editor under `pkg/`.
    pub static_dir: PathBuf,
    /// Upstream scorer base URL, without trailing slash. `None` disables scoring.
    pub scorer_url: Option<String>,
    pub timeouts: ScorerTimeouts,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `static/` next to this crate's manifest
    /// - `SCORER_URL`: upstream scorer base URL; unset or empty disables scoring
    /// - `SCORER_TIMEOUT_SECS`: default 30
    /// - `SCORER_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is present but not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR").map_or_else(default_static_dir, PathBuf::from);
        let scorer_url = lookup("SCORER_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let timeouts = ScorerTimeouts {
            request_secs: parse_u64(lookup("SCORER_TIMEOUT_SECS"), DEFAULT_SCORER_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("SCORER_CONNECT_TIMEOUT_SECS"), DEFAULT_SCORER_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, static_dir, scorer_url, timeouts })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

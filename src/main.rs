mod config;
mod routes;
mod scorer;
mod state;

use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, HostConfig};
use crate::scorer::{ScorerClient, ScorerError};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scorer(#[from] ScorerError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = HostConfig::from_env()?;

    // Scoring stays disabled (503) without an upstream; the page still loads.
    let scorer = match config.scorer_url.as_deref() {
        Some(url) => {
            let client = ScorerClient::new(url, config.timeouts)?;
            tracing::info!(endpoint = client.endpoint(), "forwarding lines to scorer");
            Some(client)
        }
        None => {
            tracing::warn!("SCORER_URL not set; /api/calculate will answer 503");
            None
        }
    };

    let state = state::AppState::new(scorer);
    let app = routes::app(state, &config.static_dir);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, static_dir = %config.static_dir.display(), "edgeline listening");
    axum::serve(listener, app).await?;
    Ok(())
}

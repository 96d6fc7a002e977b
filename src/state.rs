//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; the scorer client is Arc-wrapped.

use std::sync::Arc;

use crate::scorer::ScorerClient;

#[derive(Clone, Default)]
pub struct AppState {
    /// Upstream scorer. `None` when `SCORER_URL` is unset.
    pub scorer: Option<Arc<ScorerClient>>,
}

impl AppState {
    #[must_use]
    pub fn new(scorer: Option<ScorerClient>) -> Self {
        Self { scorer: scorer.map(Arc::new) }
    }
}

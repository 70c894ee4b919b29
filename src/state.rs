//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Sorting is stateless per request, so the state only carries config.

use std::sync::Arc;

use crate::config::AppConfig;

/// Clone is required by Axum; the config is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

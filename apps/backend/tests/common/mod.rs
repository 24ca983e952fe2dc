//! Common test utilities for integration tests.
//!
//! Unlike a database-backed service there is nothing external to stand up:
//! every context gets its own in-memory store, so tests are isolated and
//! run anywhere.

pub mod fixtures;

use axum::Router;

use speakback_backend::config::AppConfig;
use speakback_backend::{router, AppState};

/// Test context wrapping an app with a fresh in-memory store.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a context with explicit configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let app = router(state.clone());
        Self { state, app }
    }

    /// Create a context running the named scheduling strategy.
    pub fn with_strategy(name: &str) -> Self {
        Self::with_config(AppConfig {
            strategy_name: name.to_string(),
            ..AppConfig::default()
        })
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use review_core::ReviewSession;

use crate::config::AppConfig;
use crate::services::evaluator::{AnswerEvaluator, MockEvaluator};
use crate::store::NoteStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<NoteStore>,
    pub session: Arc<Mutex<Option<ReviewSession>>>,
    pub config: Arc<AppConfig>,
    pub evaluator: Arc<dyn AnswerEvaluator>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let evaluator = MockEvaluator::new(config.eval_seed);
        Self {
            store: Arc::new(NoteStore::new()),
            session: Arc::new(Mutex::new(None)),
            config: Arc::new(config),
            evaluator: Arc::new(evaluator),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Note routes
        .route(
            "/api/notes",
            get(routes::notes::list).post(routes::notes::create),
        )
        .route(
            "/api/notes/{id}",
            get(routes::notes::get_one)
                .put(routes::notes::update)
                .delete(routes::notes::remove),
        )
        .route("/api/notes/{id}/complete", post(routes::notes::complete))
        .route("/api/notes/{id}/evaluate", post(routes::evaluate::evaluate))
        // Review routes
        .route("/api/review/queue", get(routes::review::queue))
        .route(
            "/api/review/session",
            post(routes::review::start_session).get(routes::review::session_state),
        )
        .route("/api/review/session/rating", post(routes::review::submit_rating))
        .route("/api/review/session/advance", post(routes::review::advance))
        // Stats routes
        .route("/api/stats", get(routes::stats::overview))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(strategy = %config.strategy_name, "Configured scheduling strategy");

    let state = AppState::new(config);
    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

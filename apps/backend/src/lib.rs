pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use steno_core::AnalysisSettings;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Engine defaults, fixed at startup.
    pub settings: Arc<AnalysisSettings>,
}

impl AppState {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/settings", get(routes::settings::get_all))
        .route("/api/analyze", post(routes::analyze::analyze))
        .route("/api/compare", post(routes::compare::compare))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
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
    tracing::info!(
        equivalence = config.analysis.equivalence.enabled,
        legacy_glyphs = config.analysis.equivalence.legacy_glyphs,
        tokenize_policy = config.analysis.tokenize_policy.as_str(),
        max_tokens = ?config.analysis.max_tokens,
        "Loaded analysis settings"
    );

    let addr = config.addr();
    let app = app(AppState::new(config.analysis));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

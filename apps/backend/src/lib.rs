pub mod config;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use answer_core::Grader;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub grader: Arc<Grader>,
}

impl AppState {
    pub fn new(grader: Grader) -> Self {
        Self {
            grader: Arc::new(grader),
        }
    }
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/answers/evaluate", post(routes::answers::evaluate))
        .route("/api/answers/check", post(routes::answers::check))
        .route("/api/scores/grade", post(routes::scores::grade))
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

    let config = Config::from_env()?;

    tracing::info!(
        numeric_tolerance = config.policy.numeric_tolerance,
        fallback_threshold = config.policy.fallback_threshold,
        "Loaded grading policy"
    );
    let grader = Grader::new(config.policy.clone())?;

    let app = build_router(AppState::new(grader));

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

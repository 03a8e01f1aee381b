// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use trend_engine::application::dashboard_service::DashboardService;
use trend_engine::application::trend_service::TrendService;
use trend_engine::infrastructure::config::load_engine_config;
use trend_engine::presentation::app_state::AppState;
use trend_engine::presentation::handlers::{evaluate_batch, evaluate_trend, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let engine_config = load_engine_config()?;
    let addr = engine_config.bind_addr()?;

    // Create services (application layer)
    let trend_service = TrendService::new(engine_config.calendar()?);
    let dashboard_service = DashboardService::new(
        trend_service,
        engine_config.trend_defaults(),
        engine_config.batch.max_widgets,
    );

    // Create application state
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/trends", post(evaluate_trend))
        .route("/trends/batch", post(evaluate_batch))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    tracing::info!(
        "Starting trend-engine service on {} (calendar offset {})",
        addr,
        trend_service.calendar().zone()
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

// HTTP request handlers
use crate::domain::dashboard::{WidgetTrend, WidgetTrendRequest};
use crate::domain::sample::Series;
use crate::domain::trend::{PartialTrendOptions, TrendResult};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    pub current: Series,
    #[serde(default)]
    pub previous: Option<Series>,
    #[serde(default)]
    pub options: PartialTrendOptions,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub widgets: Vec<WidgetTrendRequest>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub widgets: Vec<WidgetTrend>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Evaluate a single metric trend
pub async fn evaluate_trend(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TrendRequest>,
) -> Json<TrendResult> {
    let result = state.dashboard_service.evaluate(
        &request.current,
        request.previous.as_deref(),
        request.options,
    );
    Json(result)
}

/// Evaluate every widget trend on a dashboard page
pub async fn evaluate_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    let widgets = state
        .dashboard_service
        .evaluate_widgets(request.widgets)
        .await?;
    Ok(Json(BatchResponse { widgets }))
}

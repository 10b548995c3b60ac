//! Axum route handlers for the idea-driven endpoints.
//! Each one is a thin adapter over `GatewayService`; errors map through `AppError`.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::models::{IdeaRequest, LandingPageContent, MarketChartResponse};
use crate::state::AppState;

/// POST /api/generate
///
/// Landing page copy for the idea. 400 on a blank idea, 500 on any generation failure.
pub async fn handle_generate_landing_page(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<LandingPageContent>, AppError> {
    let content = state.gateway.generate_landing_page(&request.idea).await?;
    Ok(Json(content))
}

/// POST /analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<Value>, AppError> {
    let analysis = state.gateway.analyze_idea(&request.idea).await?;
    Ok(Json(analysis))
}

/// POST /charts
///
/// Returns `{ "market_analysis": {...} }`.
pub async fn handle_charts(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<MarketChartResponse>, AppError> {
    let market_analysis = state.gateway.analyze_market_data(&request.idea).await?;
    Ok(Json(MarketChartResponse { market_analysis }))
}

/// POST /mvp
pub async fn handle_mvp(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<Value>, AppError> {
    let roadmap = state.gateway.generate_mvp_roadmap(&request.idea).await?;
    Ok(Json(roadmap))
}

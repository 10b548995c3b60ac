use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::finance::projection::{FinancialAnalysisRequest, FinancialProjectionResult};
use crate::state::AppState;

/// POST /financial_analysis
pub async fn handle_financial_analysis(
    State(state): State<AppState>,
    Json(request): Json<FinancialAnalysisRequest>,
) -> Result<Json<FinancialProjectionResult>, AppError> {
    let projection = state.gateway.compute_financial_analysis(&request)?;
    Ok(Json(projection))
}

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::perf::{record_performance, stored_performance, PerformanceReport, PerformanceSample};
use crate::state::AppState;

/// POST /api/v1/perf
pub async fn handle_record(
    State(state): State<AppState>,
    Json(sample): Json<PerformanceSample>,
) -> Result<Json<PerformanceReport>, AppError> {
    let report = record_performance(state.preferences.as_ref(), sample).await?;
    Ok(Json(report))
}

/// GET /api/v1/perf
pub async fn handle_get(State(state): State<AppState>) -> Result<Json<PerformanceReport>, AppError> {
    stored_performance(state.preferences.as_ref())
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("no performance report recorded".to_string()))
}

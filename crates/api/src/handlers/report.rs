//! Handlers for `/reportes`.

use axum::extract::State;
use axum::Json;
use konoha_db::models::report::{MissionReportEntry, NinjaReportEntry};
use konoha_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/reportes/ninjas
pub async fn ninja_report(State(state): State<AppState>) -> AppResult<Json<Vec<NinjaReportEntry>>> {
    let report = ReportRepo::ninja_report(&state.pool).await?;
    tracing::debug!(entries = report.len(), "Built ninja report");
    Ok(Json(report))
}

/// GET /api/reportes/misiones
pub async fn mission_report(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MissionReportEntry>>> {
    let report = ReportRepo::mission_report(&state.pool).await?;
    tracing::debug!(entries = report.len(), "Built mission report");
    Ok(Json(report))
}

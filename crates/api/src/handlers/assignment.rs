//! Handlers for the `/asignaciones` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use konoha_core::error::CoreError;
use konoha_core::rank;
use konoha_core::types::DbId;
use konoha_db::models::assignment::{Assignment, CreateAssignment};
use konoha_db::repositories::{AssignmentRepo, MissionRepo, NinjaRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Asignación",
        id,
    })
}

/// GET /api/asignaciones
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list(&state.pool).await?;
    tracing::debug!(count = assignments.len(), "Listed assignments");
    Ok(Json(assignments))
}

/// GET /api/asignaciones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(assignment))
}

/// POST /api/asignaciones
///
/// Resolves the ninja and mission, checks rank eligibility and inserts the
/// assignment inside one transaction. Unknown references are reported as
/// 400, not 404.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateAssignment>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let mut tx = state.pool.begin().await?;

    let ninja = NinjaRepo::find_by_id(&mut *tx, input.ninja_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!("Ninja con id {} no existe", input.ninja_id))
        })?;
    let mission = MissionRepo::find_by_id(&mut *tx, input.mission_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(format!("Misión con id {} no existe", input.mission_id))
        })?;

    if let Err(err) = rank::check_eligibility(&ninja.name, &ninja.rank, &mission.rank) {
        tracing::info!(
            ninja_id = ninja.id,
            mission_id = mission.id,
            ninja_rank = %ninja.rank,
            mission_rank = %mission.rank,
            "Assignment rejected: insufficient rank"
        );
        return Err(err.into());
    }

    let assignment = AssignmentRepo::create(&mut *tx, ninja.id, mission.id).await?;
    tx.commit().await?;

    tracing::info!(
        id = assignment.id,
        ninja_id = assignment.ninja_id,
        mission_id = assignment.mission_id,
        "Mission assigned"
    );
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// PUT /api/asignaciones/{id}/completar
pub async fn complete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::complete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Assignment completed");
    Ok(Json(assignment))
}

//! Handlers for the `/misiones` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use konoha_core::error::CoreError;
use konoha_core::types::DbId;
use konoha_db::models::mission::{CreateMission, Mission};
use konoha_db::repositories::MissionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/misiones
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mission>>> {
    let missions = MissionRepo::list(&state.pool).await?;
    tracing::debug!(count = missions.len(), "Listed missions");
    Ok(Json(missions))
}

/// GET /api/misiones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Mission>> {
    let mission = MissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Misión",
            id,
        }))?;
    Ok(Json(mission))
}

/// POST /api/misiones
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateMission>,
) -> AppResult<(StatusCode, Json<Mission>)> {
    let new = input.into_new()?;
    let mission = MissionRepo::create(&state.pool, &new).await?;
    tracing::info!(id = mission.id, name = %mission.name, rank = %mission.rank, "Mission created");
    Ok((StatusCode::CREATED, Json(mission)))
}

/// DELETE /api/misiones/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = MissionRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Mission deleted");
        Ok(Json(MessageResponse {
            message: "Misión eliminada correctamente",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Misión",
            id,
        }))
    }
}

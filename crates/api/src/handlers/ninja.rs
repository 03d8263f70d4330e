//! Handlers for the `/ninjas` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use konoha_core::error::CoreError;
use konoha_core::types::DbId;
use konoha_db::models::ninja::{CreateNinja, Ninja, UpdateNinja};
use konoha_db::repositories::NinjaRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Ninja", id })
}

/// GET /api/ninjas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Ninja>>> {
    let ninjas = NinjaRepo::list(&state.pool).await?;
    tracing::debug!(count = ninjas.len(), "Listed ninjas");
    Ok(Json(ninjas))
}

/// GET /api/ninjas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Ninja>> {
    let ninja = NinjaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ninja))
}

/// POST /api/ninjas
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateNinja>,
) -> AppResult<(StatusCode, Json<Ninja>)> {
    let new = input.into_new()?;
    let ninja = NinjaRepo::create(&state.pool, &new).await?;
    tracing::info!(id = ninja.id, name = %ninja.name, rank = %ninja.rank, "Ninja registered");
    Ok((StatusCode::CREATED, Json(ninja)))
}

/// PUT /api/ninjas/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateNinja>,
) -> AppResult<Json<Ninja>> {
    let changes = input.into_changes()?;
    let ninja = NinjaRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Ninja updated");
    Ok(Json(ninja))
}

/// DELETE /api/ninjas/{id}
///
/// Assignments of the ninja are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !NinjaRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Ninja deleted");
    Ok(Json(MessageResponse {
        message: "Ninja eliminado correctamente",
    }))
}

//! Handler for `/exportar/{formato}`.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use konoha_db::repositories::{MissionRepo, NinjaRepo};

use crate::error::AppResult;
use crate::export::{self, ExportFormat};
use crate::extract::ApiPath;
use crate::state::AppState;

/// GET /api/exportar/{formato}
///
/// Returns the full roster as a downloadable document.
pub async fn export_roster(
    State(state): State<AppState>,
    ApiPath(format): ApiPath<String>,
) -> AppResult<Response> {
    let format = ExportFormat::from_str_value(&format)?;

    let ninjas = NinjaRepo::list(&state.pool).await?;
    let missions = MissionRepo::list(&state.pool).await?;
    let document = export::render(format, &ninjas, &missions, chrono::Utc::now())?;

    tracing::info!(
        ?format,
        ninjas = ninjas.len(),
        missions = missions.len(),
        "Roster exported"
    );

    let headers = [
        (CONTENT_TYPE, format.content_type().to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", format.file_name()),
        ),
    ];
    Ok((headers, document).into_response())
}

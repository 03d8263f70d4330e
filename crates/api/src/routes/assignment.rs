//! Route definitions for the `/asignaciones` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// Routes mounted at `/asignaciones`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}/completar    -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assignment::list).post(assignment::create))
        .route("/{id}", get(assignment::get_by_id))
        .route("/{id}/completar", put(assignment::complete))
}

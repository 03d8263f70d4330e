//! Route definitions for the `/misiones` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/misiones`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission::list).post(mission::create))
        .route("/{id}", get(mission::get_by_id).delete(mission::delete))
}

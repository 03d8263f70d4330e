//! Route definitions for `/reportes`.

use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ninjas", get(report::ninja_report))
        .route("/misiones", get(report::mission_report))
}

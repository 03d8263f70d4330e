//! Route definitions for `/exportar`.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{format}", get(export::export_roster))
}

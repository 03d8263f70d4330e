pub mod assignment;
pub mod export;
pub mod health;
pub mod mission;
pub mod ninja;
pub mod pages;
pub mod report;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ninjas                                 list, create
/// /ninjas/{id}                            get, update, delete
///
/// /misiones                               list, create
/// /misiones/{id}                          get, delete
///
/// /asignaciones                           list, create
/// /asignaciones/{id}                      get
/// /asignaciones/{id}/completar            mark complete (PUT)
///
/// /reportes/ninjas                        per-ninja completion report
/// /reportes/misiones                      per-mission assignment report
///
/// /exportar/{formato}                     roster export (texto, json, xml)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/ninjas", ninja::router())
        .nest("/misiones", mission::router())
        .nest("/asignaciones", assignment::router())
        .nest("/reportes", report::router())
        .nest("/exportar", export::router())
}

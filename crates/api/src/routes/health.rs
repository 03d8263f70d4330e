//! Liveness probe for process managers and load balancers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok`, or `degraded` when the roster database cannot be reached.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn new(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }

    /// 200 while the database answers, 503 otherwise.
    fn status_code(&self) -> StatusCode {
        if self.db_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let report = match konoha_db::health_check(&state.pool).await {
        Ok(()) => HealthReport::new(true),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            HealthReport::new(false)
        }
    };
    (report.status_code(), Json(report))
}

/// `GET /health`, mounted at the root next to the landing page.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

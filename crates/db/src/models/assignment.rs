//! Mission assignment model and DTOs.

use konoha_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An assignment row joined with the names of its ninja and mission.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub ninja_id: DbId,
    #[serde(rename = "ninja_nombre")]
    pub ninja_name: String,
    #[serde(rename = "mision_id")]
    pub mission_id: DbId,
    #[serde(rename = "mision_nombre")]
    pub mission_name: String,
    #[serde(rename = "fecha_asignacion")]
    pub assigned_at: Timestamp,
    /// Set exactly when `completed` is true.
    #[serde(rename = "fecha_completado")]
    pub completed_at: Option<Timestamp>,
    #[serde(rename = "completada")]
    pub completed: bool,
}

/// Request body for `POST /api/asignaciones`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub ninja_id: DbId,
    #[serde(rename = "mision_id")]
    pub mission_id: DbId,
}

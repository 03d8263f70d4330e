//! Report rows and response entries.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::mission::Mission;
use crate::models::ninja::Ninja;

/// A ninja with its assignment counts, as read from the database.
#[derive(Debug, Clone, FromRow)]
pub struct NinjaTotalsRow {
    #[sqlx(flatten)]
    pub ninja: Ninja,
    pub assigned_count: i64,
    pub completed_count: i64,
}

/// One mission/assignment pair; the assignment columns are null for a
/// mission nobody has been assigned to.
#[derive(Debug, Clone, FromRow)]
pub struct MissionAssignmentRow {
    #[sqlx(flatten)]
    pub mission: Mission,
    pub ninja_name: Option<String>,
    pub completed: Option<bool>,
}

/// Entry of `GET /api/reportes/ninjas`.
#[derive(Debug, Clone, Serialize)]
pub struct NinjaReportEntry {
    pub ninja: Ninja,
    #[serde(rename = "misiones_asignadas")]
    pub assigned_count: i64,
    #[serde(rename = "misiones_completadas")]
    pub completed_count: i64,
    #[serde(rename = "tasa_completado")]
    pub completion_rate: f64,
}

/// Entry of `GET /api/reportes/misiones`.
#[derive(Debug, Clone, Serialize)]
pub struct MissionReportEntry {
    #[serde(rename = "mision")]
    pub mission: Mission,
    #[serde(rename = "ninjas_asignados")]
    pub assigned_ninjas: Vec<String>,
    #[serde(rename = "total_asignaciones")]
    pub total_assignments: i64,
    #[serde(rename = "completada")]
    pub completed: bool,
}

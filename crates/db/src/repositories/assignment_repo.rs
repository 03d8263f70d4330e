//! Repository for the `mission_assignments` table.
//!
//! Every query returns rows joined with the ninja and mission names.

use konoha_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::assignment::Assignment;

/// Select list over an assignment source aliased `a`.
const JOINED_COLUMNS: &str = "a.id, a.ninja_id, n.name AS ninja_name, \
     a.mission_id, m.name AS mission_name, a.assigned_at, a.completed_at, a.completed";

/// Joins from an assignment source aliased `a` to its ninja and mission.
const JOINS: &str = "JOIN ninjas n ON n.id = a.ninja_id JOIN missions m ON m.id = a.mission_id";

/// Columns returned by INSERT/UPDATE before the name join.
const RETURNING: &str = "id, ninja_id, mission_id, assigned_at, completed_at, completed";

/// Provides create/read/complete operations for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new, incomplete assignment.
    ///
    /// Callers are expected to have resolved both references and checked
    /// rank eligibility inside the same transaction.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        ninja_id: DbId,
        mission_id: DbId,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                INSERT INTO mission_assignments (ninja_id, mission_id)
                VALUES ($1, $2)
                RETURNING {RETURNING}
             )
             SELECT {JOINED_COLUMNS} FROM a {JOINS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(ninja_id)
            .bind(mission_id)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query =
            format!("SELECT {JOINED_COLUMNS} FROM mission_assignments a {JOINS} WHERE a.id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all assignments in assignment order.
    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Assignment>, sqlx::Error> {
        let query =
            format!("SELECT {JOINED_COLUMNS} FROM mission_assignments a {JOINS} ORDER BY a.id ASC");
        sqlx::query_as::<_, Assignment>(&query)
            .fetch_all(executor)
            .await
    }

    /// Mark an assignment completed, stamping the completion time.
    ///
    /// Completing an already completed assignment refreshes the timestamp.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn complete<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!(
            "WITH a AS (
                UPDATE mission_assignments
                SET completed = TRUE, completed_at = clock_timestamp()
                WHERE id = $1
                RETURNING {RETURNING}
             )
             SELECT {JOINED_COLUMNS} FROM a {JOINS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}

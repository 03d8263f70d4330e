//! Repository for the `missions` table.

use konoha_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::mission::{Mission, NewMission};

const COLUMNS: &str = "id, name, rank, reward, description, created_at";

/// Provides create/read/delete operations for missions.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &NewMission,
    ) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (name, rank, reward, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.name)
            .bind(input.rank.as_str())
            .bind(input.reward)
            .bind(&input.description)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all missions in creation order.
    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM missions ORDER BY id ASC");
        sqlx::query_as::<_, Mission>(&query).fetch_all(executor).await
    }

    /// Delete a mission together with its assignments. Returns `true` if a
    /// row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

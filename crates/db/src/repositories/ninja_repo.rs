//! Repository for the `ninjas` table.

use konoha_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::ninja::{NewNinja, Ninja, NinjaChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, rank, attack, defense, chakra, village, abilities, registered_at";

/// Provides CRUD operations for ninjas.
pub struct NinjaRepo;

impl NinjaRepo {
    /// Insert a new ninja, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &NewNinja,
    ) -> Result<Ninja, sqlx::Error> {
        let query = format!(
            "INSERT INTO ninjas (name, rank, attack, defense, chakra, village, abilities)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ninja>(&query)
            .bind(&input.name)
            .bind(input.rank.as_str())
            .bind(input.attack)
            .bind(input.defense)
            .bind(input.chakra)
            .bind(&input.village)
            .bind(input.abilities.to_stored())
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Ninja>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ninjas WHERE id = $1");
        sqlx::query_as::<_, Ninja>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List all ninjas in registration order.
    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Ninja>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ninjas ORDER BY id ASC");
        sqlx::query_as::<_, Ninja>(&query).fetch_all(executor).await
    }

    /// Update a ninja. Only `Some` fields in `changes` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        changes: &NinjaChanges,
    ) -> Result<Option<Ninja>, sqlx::Error> {
        let query = format!(
            "UPDATE ninjas SET
                name = COALESCE($2, name),
                rank = COALESCE($3, rank),
                attack = COALESCE($4, attack),
                defense = COALESCE($5, defense),
                chakra = COALESCE($6, chakra),
                village = COALESCE($7, village),
                abilities = COALESCE($8, abilities)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ninja>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.rank.map(|r| r.as_str()))
            .bind(changes.attack)
            .bind(changes.defense)
            .bind(changes.chakra)
            .bind(&changes.village)
            .bind(changes.abilities.as_ref().map(|a| a.to_stored()))
            .fetch_optional(executor)
            .await
    }

    /// Delete a ninja and, through the foreign key cascade, its assignments.
    /// Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ninjas WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

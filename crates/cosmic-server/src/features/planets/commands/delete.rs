use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePlanetCommand {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeletePlanetError {
    #[error("Planet {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Delete a planet and the missions flown to it; scientists are untouched
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: DeletePlanetCommand,
) -> Result<(), DeletePlanetError> {
    let mut tx = db::begin_write(&pool).await?;

    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM planets WHERE id = ?1")
        .bind(command.id)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_none() {
        return Err(DeletePlanetError::NotFound(command.id));
    }

    let missions_deleted = sqlx::query("DELETE FROM missions WHERE planet_id = ?1")
        .bind(command.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM planets WHERE id = ?1")
        .bind(command.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(planet_id = command.id, missions_deleted, "Planet deleted");

    Ok(())
}

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteScientistCommand {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteScientistError {
    #[error("Scientist {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Delete a scientist together with every mission that references it
///
/// Missions are removed explicitly in the same transaction, so the cascade
/// holds even on a connection without foreign key enforcement.
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    command: DeleteScientistCommand,
) -> Result<(), DeleteScientistError> {
    let mut tx = db::begin_write(&pool).await?;

    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM scientists WHERE id = ?1")
        .bind(command.id)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_none() {
        return Err(DeleteScientistError::NotFound(command.id));
    }

    let missions_deleted = sqlx::query("DELETE FROM missions WHERE scientist_id = ?1")
        .bind(command.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    sqlx::query("DELETE FROM scientists WHERE id = ?1")
        .bind(command.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(scientist_id = command.id, missions_deleted, "Scientist deleted");

    Ok(())
}

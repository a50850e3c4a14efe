use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Mission;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMissionsQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListMissionsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    _query: ListMissionsQuery,
) -> Result<Vec<Mission>, ListMissionsError> {
    let missions = sqlx::query_as::<_, Mission>(
        "SELECT id, name, scientist_id, planet_id FROM missions ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    tracing::debug!(count = missions.len(), "Listed missions");

    Ok(missions)
}

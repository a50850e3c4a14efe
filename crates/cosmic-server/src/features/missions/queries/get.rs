use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Mission;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMissionQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetMissionError {
    #[error("Mission {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, query: GetMissionQuery) -> Result<Mission, GetMissionError> {
    sqlx::query_as::<_, Mission>(
        "SELECT id, name, scientist_id, planet_id FROM missions WHERE id = ?1",
    )
    .bind(query.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetMissionError::NotFound(query.id))
}

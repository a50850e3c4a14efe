//! Get scientist query

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Scientist;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetScientistQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetScientistError {
    #[error("Scientist {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    query: GetScientistQuery,
) -> Result<Scientist, GetScientistError> {
    sqlx::query_as::<_, Scientist>(
        "SELECT id, name, field_of_study, avatar FROM scientists WHERE id = ?1",
    )
    .bind(query.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetScientistError::NotFound(query.id))
}

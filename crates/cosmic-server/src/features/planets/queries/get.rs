use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Planet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPlanetQuery {
    pub id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetPlanetError {
    #[error("Planet {0} not found")]
    NotFound(i64),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: SqlitePool, query: GetPlanetQuery) -> Result<Planet, GetPlanetError> {
    sqlx::query_as::<_, Planet>(
        "SELECT id, name, distance_from_earth, nearest_star, image FROM planets WHERE id = ?1",
    )
    .bind(query.id)
    .fetch_optional(&pool)
    .await?
    .ok_or(GetPlanetError::NotFound(query.id))
}

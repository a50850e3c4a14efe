use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Planet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlanetsQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListPlanetsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    _query: ListPlanetsQuery,
) -> Result<Vec<Planet>, ListPlanetsError> {
    let planets = sqlx::query_as::<_, Planet>(
        "SELECT id, name, distance_from_earth, nearest_star, image FROM planets ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    tracing::debug!(count = planets.len(), "Listed planets");

    Ok(planets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestPlanet;

    #[sqlx::test]
    async fn test_handle_lists_all(pool: SqlitePool) -> sqlx::Result<()> {
        let first = TestPlanet::new("Mercury").insert(&pool).await?;
        let second = TestPlanet::default().insert(&pool).await?;

        let planets = handle(pool.clone(), ListPlanetsQuery).await.unwrap();
        assert_eq!(planets, vec![first, second]);
        Ok(())
    }
}

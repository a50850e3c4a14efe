//! List scientists query

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Scientist;

/// Query for every scientist, in creation order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListScientistsQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListScientistsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: SqlitePool,
    _query: ListScientistsQuery,
) -> Result<Vec<Scientist>, ListScientistsError> {
    let scientists = sqlx::query_as::<_, Scientist>(
        "SELECT id, name, field_of_study, avatar FROM scientists ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    tracing::debug!(count = scientists.len(), "Listed scientists");

    Ok(scientists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestScientist;

    #[sqlx::test]
    async fn test_handle_empty(pool: SqlitePool) -> sqlx::Result<()> {
        let scientists = handle(pool.clone(), ListScientistsQuery).await.unwrap();
        assert!(scientists.is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_lists_in_creation_order(pool: SqlitePool) -> sqlx::Result<()> {
        TestScientist::new("Zed", "Zoology").insert(&pool).await?;
        TestScientist::new("Amy", "Astronomy").insert(&pool).await?;

        let names: Vec<String> = handle(pool.clone(), ListScientistsQuery)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        Ok(())
    }
}

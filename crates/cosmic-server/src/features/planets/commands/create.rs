//! Create planet command
//!
//! Planets have no required fields; every attribute may be omitted or `null`.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::Planet;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlanetCommand {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub distance_from_earth: Option<String>,
    #[serde(default)]
    pub nearest_star: Option<String>,
    /// Optional image URL
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreatePlanetError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool, command), fields(name = ?command.name))]
pub async fn handle(
    pool: SqlitePool,
    command: CreatePlanetCommand,
) -> Result<Planet, CreatePlanetError> {
    let planet = sqlx::query_as::<_, Planet>(
        r#"
        INSERT INTO planets (name, distance_from_earth, nearest_star, image)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, name, distance_from_earth, nearest_star, image
        "#,
    )
    .bind(command.name)
    .bind(command.distance_from_earth)
    .bind(command.nearest_star)
    .bind(command.image)
    .fetch_one(&pool)
    .await?;

    tracing::info!(planet_id = planet.id, "Planet created");

    Ok(planet)
}

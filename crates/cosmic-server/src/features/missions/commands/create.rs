//! Create mission command
//!
//! A mission links one scientist to one planet. Both must already exist, and
//! the `(name, scientist_id, planet_id)` triple must be new.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::error_helpers::map_constraint_violation;
use crate::features::shared::validation::{required_id, required_text, FieldValidationError};
use crate::models::Mission;

/// Command to create a new mission
///
/// ```rust,ignore
/// let command = CreateMissionCommand {
///     name: Some("Iron Man on Mars".to_string()),
///     scientist_id: Some(scientist.id),
///     planet_id: Some(planet.id),
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateMissionCommand {
    pub name: Option<String>,
    pub scientist_id: Option<i64>,
    pub planet_id: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateMissionError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("Scientist {0} does not exist")]
    ScientistNotFound(i64),

    #[error("Planet {0} does not exist")]
    PlanetNotFound(i64),

    #[error("This mission already exists")]
    Duplicate,

    #[error("Mission references a missing scientist or planet")]
    InvalidReference,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Validated fields of a [`CreateMissionCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewMission<'a> {
    pub name: &'a str,
    pub scientist_id: i64,
    pub planet_id: i64,
}

impl CreateMissionCommand {
    /// All three fields must be present; `name` must be non-blank
    pub fn validate(&self) -> Result<NewMission<'_>, CreateMissionError> {
        Ok(NewMission {
            name: required_text(self.name.as_deref(), "name")?,
            scientist_id: required_id(self.scientist_id, "scientist_id")?,
            planet_id: required_id(self.planet_id, "planet_id")?,
        })
    }
}

/// Handler function for creating missions
///
/// Parent existence and the duplicate check run in the same write transaction
/// as the insert, so a concurrent identical mission sees the first one and is
/// rejected as a duplicate. The schema constraints back both checks up.
#[tracing::instrument(skip(pool, command), fields(name = ?command.name))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateMissionCommand,
) -> Result<Mission, CreateMissionError> {
    let new = command.validate()?;

    let mut tx = db::begin_write(&pool).await?;

    let scientist: Option<i64> = sqlx::query_scalar("SELECT id FROM scientists WHERE id = ?1")
        .bind(new.scientist_id)
        .fetch_optional(&mut *tx)
        .await?;
    if scientist.is_none() {
        return Err(CreateMissionError::ScientistNotFound(new.scientist_id));
    }

    let planet: Option<i64> = sqlx::query_scalar("SELECT id FROM planets WHERE id = ?1")
        .bind(new.planet_id)
        .fetch_optional(&mut *tx)
        .await?;
    if planet.is_none() {
        return Err(CreateMissionError::PlanetNotFound(new.planet_id));
    }

    let existing: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM missions WHERE name = ?1 AND scientist_id = ?2 AND planet_id = ?3",
    )
    .bind(new.name)
    .bind(new.scientist_id)
    .bind(new.planet_id)
    .fetch_optional(&mut *tx)
    .await?;
    if existing.is_some() {
        return Err(CreateMissionError::Duplicate);
    }

    let mission = sqlx::query_as::<_, Mission>(
        r#"
        INSERT INTO missions (name, scientist_id, planet_id)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, scientist_id, planet_id
        "#,
    )
    .bind(new.name)
    .bind(new.scientist_id)
    .bind(new.planet_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        map_constraint_violation(
            e,
            CreateMissionError::Duplicate,
            CreateMissionError::InvalidReference,
            CreateMissionError::Database,
        )
    })?;

    tx.commit().await?;

    tracing::info!(
        mission_id = mission.id,
        scientist_id = mission.scientist_id,
        planet_id = mission.planet_id,
        "Mission created"
    );

    Ok(mission)
}

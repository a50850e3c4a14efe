//! Create scientist command
//!
//! - Command: plain data decoded from the request body, with `validate()`
//! - Handler: standalone async function holding the business logic and SQL

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::validation::{required_text, FieldValidationError};
use crate::models::Scientist;

/// Command to create a new scientist
///
/// Fields are optional at the type level so that a missing key surfaces as a
/// validation error rather than a decoding failure.
///
/// ```rust,ignore
/// let command = CreateScientistCommand {
///     name: Some("Tony Stark".to_string()),
///     field_of_study: Some("Engineering".to_string()),
///     avatar: None,
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateScientistCommand {
    /// Display name, unique across scientists
    pub name: Option<String>,

    pub field_of_study: Option<String>,

    /// Optional avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateScientistError {
    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("A scientist with this name already exists")]
    DuplicateName,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateScientistCommand {
    /// Both `name` and `field_of_study` must be present and non-blank
    ///
    /// Returns the validated `(name, field_of_study)` pair.
    pub fn validate(&self) -> Result<(&str, &str), CreateScientistError> {
        let name = required_text(self.name.as_deref(), "name")?;
        let field_of_study = required_text(self.field_of_study.as_deref(), "field_of_study")?;
        Ok((name, field_of_study))
    }
}

/// Handler function for creating scientists
///
/// The name check and the insert share one write transaction, so concurrent
/// creations are serialised; the `UNIQUE (name)` constraint backs the check up.
#[tracing::instrument(skip(pool, command), fields(name = ?command.name))]
pub async fn handle(
    pool: SqlitePool,
    command: CreateScientistCommand,
) -> Result<Scientist, CreateScientistError> {
    let (name, field_of_study) = command.validate()?;

    let mut tx = db::begin_write(&pool).await?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM scientists WHERE name = ?1")
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_some() {
        return Err(CreateScientistError::DuplicateName);
    }

    let scientist = sqlx::query_as::<_, Scientist>(
        r#"
        INSERT INTO scientists (name, field_of_study, avatar)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, field_of_study, avatar
        "#,
    )
    .bind(name)
    .bind(field_of_study)
    .bind(command.avatar.as_deref())
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        map_unique_violation(e, CreateScientistError::DuplicateName, CreateScientistError::Database)
    })?;

    tx.commit().await?;

    tracing::info!(scientist_id = scientist.id, "Scientist created");

    Ok(scientist)
}

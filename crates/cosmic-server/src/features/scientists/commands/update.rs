//! Update scientist command
//!
//! Partial update: a key absent from the body leaves the field as it is, an
//! explicit `null` is applied. Only `name`, `field_of_study` and `avatar` can
//! change; any other key in the body is ignored.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db;
use crate::features::shared::error_helpers::map_unique_violation;
use crate::features::shared::validation::{patch_field, required_text, FieldValidationError};
use crate::models::Scientist;

/// Command to update an existing scientist
///
/// `id` comes from the path, never from the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateScientistCommand {
    #[serde(skip)]
    pub id: i64,

    #[serde(default, deserialize_with = "patch_field", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "patch_field", skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<Option<String>>,

    #[serde(default, deserialize_with = "patch_field", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Option<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateScientistError {
    #[error("Scientist {0} not found")]
    NotFound(i64),

    #[error("{0}")]
    Validation(#[from] FieldValidationError),

    #[error("A scientist with this name already exists")]
    DuplicateName,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateScientistCommand {
    /// Fields that are present must satisfy the same rules as on creation
    pub fn validate(&self) -> Result<(), UpdateScientistError> {
        if let Some(ref name) = self.name {
            required_text(name.as_deref(), "name")?;
        }
        if let Some(ref field_of_study) = self.field_of_study {
            required_text(field_of_study.as_deref(), "field_of_study")?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.field_of_study.is_none() && self.avatar.is_none()
    }

    /// Overlay the present fields onto `current`
    fn apply(self, current: Scientist) -> Scientist {
        Scientist {
            id: current.id,
            name: self.name.flatten().unwrap_or(current.name),
            field_of_study: self.field_of_study.flatten().unwrap_or(current.field_of_study),
            avatar: match self.avatar {
                Some(avatar) => avatar,
                None => current.avatar,
            },
        }
    }
}

/// Handler function for updating scientists
///
/// An empty command is a no-op that returns the scientist unchanged.
#[tracing::instrument(skip(pool, command), fields(scientist_id = command.id))]
pub async fn handle(
    pool: SqlitePool,
    command: UpdateScientistCommand,
) -> Result<Scientist, UpdateScientistError> {
    command.validate()?;

    let mut tx = db::begin_write(&pool).await?;

    let current = sqlx::query_as::<_, Scientist>(
        "SELECT id, name, field_of_study, avatar FROM scientists WHERE id = ?1",
    )
    .bind(command.id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(UpdateScientistError::NotFound(command.id))?;

    if command.is_empty() {
        tracing::debug!("Empty update, nothing to change");
        return Ok(current);
    }

    let updated = command.apply(current.clone());

    if updated.name != current.name {
        let taken: Option<i64> =
            sqlx::query_scalar("SELECT id FROM scientists WHERE name = ?1 AND id <> ?2")
                .bind(&updated.name)
                .bind(updated.id)
                .fetch_optional(&mut *tx)
                .await?;
        if taken.is_some() {
            return Err(UpdateScientistError::DuplicateName);
        }
    }

    let scientist = sqlx::query_as::<_, Scientist>(
        r#"
        UPDATE scientists
        SET name = ?1, field_of_study = ?2, avatar = ?3
        WHERE id = ?4
        RETURNING id, name, field_of_study, avatar
        "#,
    )
    .bind(&updated.name)
    .bind(&updated.field_of_study)
    .bind(updated.avatar.as_deref())
    .bind(updated.id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        map_unique_violation(e, UpdateScientistError::DuplicateName, UpdateScientistError::Database)
    })?;

    tx.commit().await?;

    tracing::info!(scientist_id = scientist.id, "Scientist updated");

    Ok(scientist)
}

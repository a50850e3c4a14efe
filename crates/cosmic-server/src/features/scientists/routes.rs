//! Scientist API routes
//!
//! - `GET /scientists` - List every scientist
//! - `POST /scientists` - Create a scientist
//! - `GET /scientists/:id` - Get a single scientist
//! - `PATCH /scientists/:id` - Partially update a scientist
//! - `DELETE /scientists/:id` - Delete a scientist and its missions
//!
//! ```rust,ignore
//! let app = Router::new()
//!     .nest("/scientists", scientists_routes())
//!     .with_state(pool);
//! ```

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::SqlitePool;

use crate::api::extract::{ApiJson, ApiPath};
use crate::api::response::ErrorResponse;

use super::{
    commands::{
        CreateScientistCommand, CreateScientistError, DeleteScientistCommand,
        DeleteScientistError, UpdateScientistCommand, UpdateScientistError,
    },
    queries::{GetScientistError, GetScientistQuery, ListScientistsError, ListScientistsQuery},
};

pub fn scientists_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_scientists).post(create_scientist))
        .route(
            "/:id",
            get(get_scientist).patch(update_scientist).delete(delete_scientist),
        )
}

// ============================================================================
// Command Handlers (Write Operations)
// ============================================================================

/// `POST /scientists` -> `201` with the created scientist
#[tracing::instrument(skip(pool, command))]
async fn create_scientist(
    State(pool): State<SqlitePool>,
    ApiJson(command): ApiJson<CreateScientistCommand>,
) -> Result<Response, ScientistApiError> {
    let scientist = super::commands::create::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(scientist)).into_response())
}

/// `PATCH /scientists/:id` -> `200` with the updated scientist
#[tracing::instrument(skip(pool, command))]
async fn update_scientist(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(mut command): ApiJson<UpdateScientistCommand>,
) -> Result<Response, ScientistApiError> {
    command.id = id;

    let scientist = super::commands::update::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(scientist)).into_response())
}

/// `DELETE /scientists/:id` -> `204` with an empty body
#[tracing::instrument(skip(pool))]
async fn delete_scientist(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, ScientistApiError> {
    super::commands::delete::handle(pool, DeleteScientistCommand { id }).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

#[tracing::instrument(skip(pool))]
async fn get_scientist(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, ScientistApiError> {
    let scientist = super::queries::get::handle(pool, GetScientistQuery { id }).await?;

    Ok((StatusCode::OK, Json(scientist)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_scientists(State(pool): State<SqlitePool>) -> Result<Response, ScientistApiError> {
    let scientists = super::queries::list::handle(pool, ListScientistsQuery).await?;

    Ok((StatusCode::OK, Json(scientists)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum ScientistApiError {
    Create(CreateScientistError),
    Update(UpdateScientistError),
    Delete(DeleteScientistError),
    Get(GetScientistError),
    List(ListScientistsError),
}

impl From<CreateScientistError> for ScientistApiError {
    fn from(err: CreateScientistError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateScientistError> for ScientistApiError {
    fn from(err: UpdateScientistError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteScientistError> for ScientistApiError {
    fn from(err: DeleteScientistError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetScientistError> for ScientistApiError {
    fn from(err: GetScientistError) -> Self {
        Self::Get(err)
    }
}

impl From<ListScientistsError> for ScientistApiError {
    fn from(err: ListScientistsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for ScientistApiError {
    fn into_response(self) -> Response {
        match self {
            ScientistApiError::Create(CreateScientistError::Database(_))
            | ScientistApiError::Update(UpdateScientistError::Database(_))
            | ScientistApiError::Delete(DeleteScientistError::Database(_))
            | ScientistApiError::Get(GetScientistError::Database(_))
            | ScientistApiError::List(ListScientistsError::Database(_)) => {
                tracing::error!("Database error in scientists API: {}", self);
                ErrorResponse::new("Request could not be completed")
                    .with_status(StatusCode::BAD_REQUEST)
            },

            ScientistApiError::Update(UpdateScientistError::NotFound(_))
            | ScientistApiError::Delete(DeleteScientistError::NotFound(_))
            | ScientistApiError::Get(GetScientistError::NotFound(_)) => {
                ErrorResponse::new("Scientist not found").with_status(StatusCode::NOT_FOUND)
            },

            ScientistApiError::Create(CreateScientistError::Validation(_))
            | ScientistApiError::Create(CreateScientistError::DuplicateName)
            | ScientistApiError::Update(UpdateScientistError::Validation(_))
            | ScientistApiError::Update(UpdateScientistError::DuplicateName) => {
                tracing::debug!("Rejected scientist: {}", self);
                ErrorResponse::new(format!("validation errors: {}", self))
                    .with_status(StatusCode::BAD_REQUEST)
            },
        }
    }
}

impl std::fmt::Display for ScientistApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create(e) => write!(f, "{}", e),
            Self::Update(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
        }
    }
}

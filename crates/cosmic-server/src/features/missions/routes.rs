//! Mission API routes
//!
//! - `GET /missions` - List every mission
//! - `POST /missions` - Create a mission for an existing scientist and planet
//! - `GET /missions/:id` - Get a single mission

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
    commands::{CreateMissionCommand, CreateMissionError},
    queries::{GetMissionError, GetMissionQuery, ListMissionsError, ListMissionsQuery},
};

pub fn missions_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_missions).post(create_mission))
        .route("/:id", get(get_mission))
}

#[tracing::instrument(skip(pool, command))]
async fn create_mission(
    State(pool): State<SqlitePool>,
    ApiJson(command): ApiJson<CreateMissionCommand>,
) -> Result<Response, MissionApiError> {
    let mission = super::commands::create::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(mission)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_mission(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, MissionApiError> {
    let mission = super::queries::get::handle(pool, GetMissionQuery { id }).await?;

    Ok((StatusCode::OK, Json(mission)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_missions(State(pool): State<SqlitePool>) -> Result<Response, MissionApiError> {
    let missions = super::queries::list::handle(pool, ListMissionsQuery).await?;

    Ok((StatusCode::OK, Json(missions)).into_response())
}

#[derive(Debug)]
enum MissionApiError {
    Create(CreateMissionError),
    Get(GetMissionError),
    List(ListMissionsError),
}

impl From<CreateMissionError> for MissionApiError {
    fn from(err: CreateMissionError) -> Self {
        Self::Create(err)
    }
}

impl From<GetMissionError> for MissionApiError {
    fn from(err: GetMissionError) -> Self {
        Self::Get(err)
    }
}

impl From<ListMissionsError> for MissionApiError {
    fn from(err: ListMissionsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for MissionApiError {
    fn into_response(self) -> Response {
        match self {
            MissionApiError::Create(CreateMissionError::Database(_))
            | MissionApiError::Get(GetMissionError::Database(_))
            | MissionApiError::List(ListMissionsError::Database(_)) => {
                tracing::error!("Database error in missions API: {}", self);
                ErrorResponse::new("Request could not be completed")
                    .with_status(StatusCode::BAD_REQUEST)
            },

            MissionApiError::Get(GetMissionError::NotFound(_)) => {
                ErrorResponse::new("Mission not found").with_status(StatusCode::NOT_FOUND)
            },

            // A missing parent is a problem with the request body, not the URL
            MissionApiError::Create(_) => {
                tracing::debug!("Rejected mission: {}", self);
                ErrorResponse::new(format!("validation errors: {}", self))
                    .with_status(StatusCode::BAD_REQUEST)
            },
        }
    }
}

impl std::fmt::Display for MissionApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
        }
    }
}

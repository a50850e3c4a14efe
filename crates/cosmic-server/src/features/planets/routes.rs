//! Planet API routes
//!
//! - `GET /planets` - List every planet
//! - `POST /planets` - Create a planet
//! - `GET /planets/:id` - Get a single planet
//! - `DELETE /planets/:id` - Delete a planet and its missions

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
    commands::{CreatePlanetCommand, CreatePlanetError, DeletePlanetCommand, DeletePlanetError},
    queries::{GetPlanetError, GetPlanetQuery, ListPlanetsError, ListPlanetsQuery},
};

pub fn planets_routes() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(list_planets).post(create_planet))
        .route("/:id", get(get_planet).delete(delete_planet))
}

#[tracing::instrument(skip(pool, command))]
async fn create_planet(
    State(pool): State<SqlitePool>,
    ApiJson(command): ApiJson<CreatePlanetCommand>,
) -> Result<Response, PlanetApiError> {
    let planet = super::commands::create::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(planet)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn delete_planet(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, PlanetApiError> {
    super::commands::delete::handle(pool, DeletePlanetCommand { id }).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[tracing::instrument(skip(pool))]
async fn get_planet(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, PlanetApiError> {
    let planet = super::queries::get::handle(pool, GetPlanetQuery { id }).await?;

    Ok((StatusCode::OK, Json(planet)).into_response())
}

#[tracing::instrument(skip(pool))]
async fn list_planets(State(pool): State<SqlitePool>) -> Result<Response, PlanetApiError> {
    let planets = super::queries::list::handle(pool, ListPlanetsQuery).await?;

    Ok((StatusCode::OK, Json(planets)).into_response())
}

#[derive(Debug)]
enum PlanetApiError {
    Create(CreatePlanetError),
    Delete(DeletePlanetError),
    Get(GetPlanetError),
    List(ListPlanetsError),
}

impl From<CreatePlanetError> for PlanetApiError {
    fn from(err: CreatePlanetError) -> Self {
        Self::Create(err)
    }
}

impl From<DeletePlanetError> for PlanetApiError {
    fn from(err: DeletePlanetError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetPlanetError> for PlanetApiError {
    fn from(err: GetPlanetError) -> Self {
        Self::Get(err)
    }
}

impl From<ListPlanetsError> for PlanetApiError {
    fn from(err: ListPlanetsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for PlanetApiError {
    fn into_response(self) -> Response {
        match self {
            PlanetApiError::Delete(DeletePlanetError::NotFound(_))
            | PlanetApiError::Get(GetPlanetError::NotFound(_)) => {
                ErrorResponse::new("Planet not found").with_status(StatusCode::NOT_FOUND)
            },
            PlanetApiError::Create(CreatePlanetError::Database(_))
            | PlanetApiError::Delete(DeletePlanetError::Database(_))
            | PlanetApiError::Get(GetPlanetError::Database(_))
            | PlanetApiError::List(ListPlanetsError::Database(_)) => {
                tracing::error!("Database error in planets API: {}", self);
                ErrorResponse::new("Request could not be completed")
                    .with_status(StatusCode::BAD_REQUEST)
            },
        }
    }
}

impl std::fmt::Display for PlanetApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
        }
    }
}

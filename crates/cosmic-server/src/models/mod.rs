//! Database models
//!
//! Each struct is both the row a query returns and the JSON body sent to
//! clients, so the serialized field set is exactly what is listed here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Planet model
///
/// Every descriptive field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: Option<String>,
    pub distance_from_earth: Option<String>,
    pub nearest_star: Option<String>,
    pub image: Option<String>,
}

/// Scientist model
///
/// `name` is unique across all scientists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Scientist {
    pub id: i64,
    pub name: String,
    pub field_of_study: String,
    pub avatar: Option<String>,
}

/// Mission model, joining one scientist to one planet
///
/// `(name, scientist_id, planet_id)` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Mission {
    pub id: i64,
    pub name: String,
    pub scientist_id: i64,
    pub planet_id: i64,
}

//! Test helpers and fixtures for database tests
//!
//! ```rust,ignore
//! use crate::features::shared::test_helpers::*;
//!
//! #[sqlx::test]
//! async fn test_something(pool: SqlitePool) -> sqlx::Result<()> {
//!     let scientist = TestScientist::new("Tony Stark", "Engineering").insert(&pool).await?;
//!     let planet = TestPlanet::new("Mars").insert(&pool).await?;
//!     let mission = TestMission::new("Iron Man on Mars", &scientist, &planet)
//!         .insert(&pool)
//!         .await?;
//!     Ok(())
//! }
//! ```

use sqlx::SqlitePool;

use crate::models::{Mission, Planet, Scientist};

/// Builder for creating test scientists
#[derive(Debug, Clone)]
pub struct TestScientist {
    pub name: String,
    pub field_of_study: String,
    pub avatar: Option<String>,
}

impl TestScientist {
    pub fn new(name: &str, field_of_study: &str) -> Self {
        Self {
            name: name.to_string(),
            field_of_study: field_of_study.to_string(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }

    pub async fn insert(self, pool: &SqlitePool) -> sqlx::Result<Scientist> {
        sqlx::query_as::<_, Scientist>(
            "INSERT INTO scientists (name, field_of_study, avatar) VALUES (?1, ?2, ?3) \
             RETURNING id, name, field_of_study, avatar",
        )
        .bind(self.name)
        .bind(self.field_of_study)
        .bind(self.avatar)
        .fetch_one(pool)
        .await
    }
}

/// Builder for creating test planets
#[derive(Debug, Clone, Default)]
pub struct TestPlanet {
    pub name: Option<String>,
    pub distance_from_earth: Option<String>,
    pub nearest_star: Option<String>,
    pub image: Option<String>,
}

impl TestPlanet {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn with_nearest_star(mut self, star: &str) -> Self {
        self.nearest_star = Some(star.to_string());
        self
    }

    pub async fn insert(self, pool: &SqlitePool) -> sqlx::Result<Planet> {
        sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (name, distance_from_earth, nearest_star, image) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING id, name, distance_from_earth, nearest_star, image",
        )
        .bind(self.name)
        .bind(self.distance_from_earth)
        .bind(self.nearest_star)
        .bind(self.image)
        .fetch_one(pool)
        .await
    }
}

/// Builder for creating test missions
#[derive(Debug, Clone)]
pub struct TestMission {
    pub name: String,
    pub scientist_id: i64,
    pub planet_id: i64,
}

impl TestMission {
    pub fn new(name: &str, scientist: &Scientist, planet: &Planet) -> Self {
        Self {
            name: name.to_string(),
            scientist_id: scientist.id,
            planet_id: planet.id,
        }
    }

    pub async fn insert(self, pool: &SqlitePool) -> sqlx::Result<Mission> {
        sqlx::query_as::<_, Mission>(
            "INSERT INTO missions (name, scientist_id, planet_id) VALUES (?1, ?2, ?3) \
             RETURNING id, name, scientist_id, planet_id",
        )
        .bind(self.name)
        .bind(self.scientist_id)
        .bind(self.planet_id)
        .fetch_one(pool)
        .await
    }
}

/// Count the rows of `table`
pub async fn count_rows(pool: &SqlitePool, table: &str) -> sqlx::Result<i64> {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
}

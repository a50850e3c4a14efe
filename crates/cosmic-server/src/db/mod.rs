//! Database connection management
//!
//! The store is SQLite accessed through a `sqlx` connection pool. Foreign key
//! enforcement is switched on for every connection so that the
//! `ON DELETE CASCADE` rules in the schema are honoured.

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Transaction;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Database setup errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("Database migration failed: {0}")]
    Migrate(#[from] MigrateError),

    /// Database configuration is invalid
    #[error("Database configuration error: {0}. Check DATABASE_URL and connection settings.")]
    Config(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// Create the connection pool described by `config`
///
/// The database file is created when it does not exist yet.
pub async fn create_pool(config: &DatabaseConfig) -> DbResult<SqlitePool> {
    if !config.url.starts_with("sqlite:") {
        return Err(DbError::Config(format!(
            "unsupported DATABASE_URL '{}': expected a sqlite: URL",
            config.url
        )));
    }

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DbError::Config(format!("invalid DATABASE_URL '{}': {}", config.url, e)))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

/// Apply the migrations embedded from `migrations/`
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed");
    Ok(())
}

/// Begin a transaction that takes the database write lock up front
///
/// A deferred `BEGIN` that reads before it writes cannot be upgraded while
/// another writer is active, and SQLite fails it with `SQLITE_BUSY` without
/// consulting the busy timeout. `BEGIN IMMEDIATE` waits for the lock instead,
/// so concurrent writers run one after another.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}

pub async fn health_check(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}

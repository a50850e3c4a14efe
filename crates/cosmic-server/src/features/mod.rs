//! Feature modules
//!
//! Each feature is a vertical slice:
//!
//! ```text
//! features/<entity>/
//! ├── commands/   write operations, one file each
//! ├── queries/    read operations, one file each
//! └── routes.rs   HTTP handlers and error mapping
//! ```
//!
//! Every operation is a plain command or query struct plus a standalone
//! `handle(pool, request)` async function.

pub mod missions;
pub mod planets;
pub mod scientists;
pub mod shared;

use axum::Router;
use sqlx::SqlitePool;

/// Router for every feature, with the connection pool as state
pub fn router(pool: SqlitePool) -> Router {
    Router::new()
        .nest("/scientists", scientists::scientists_routes())
        .nest("/planets", planets::planets_routes())
        .nest("/missions", missions::missions_routes())
        .with_state(pool)
}

//! Cosmic Crew Server Library
//!
//! HTTP API for planets, the scientists who study them and the missions
//! that send one to the other.
//!
//! # Architecture
//!
//! Features are vertical slices (`features/<entity>`), each split into:
//!
//! - **Commands** (write operations): create, update, delete. Every command
//!   runs inside a single database transaction.
//! - **Queries** (read operations): get and list.
//! - **Routes**: axum handlers mapping results and errors onto HTTP.
//!
//! ## Framework Stack
//!
//! - **Axum**: web framework
//! - **SQLx**: SQLite access and embedded migrations
//! - **Tower**: middleware (CORS, tracing, compression)
//!
//! # Example
//!
//! ```no_run
//! use cosmic_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;

pub use error::{ServerError, ServerResult};

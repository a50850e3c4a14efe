//! HTTP application assembly and server startup

pub mod extract;
pub mod response;

use std::net::SocketAddr;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tokio::signal;
use tower_http::compression::CompressionLayer;

use crate::config::Config;
use crate::error::{ServerError, ServerResult};
use crate::{db, features, middleware};

use response::{ApiError, ApiResult};

/// Connect to the database, apply migrations and serve until shutdown
pub async fn serve(config: Config) -> ServerResult<()> {
    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;

    let app = create_router(pool, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid bind address: {}", e)))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Build the application router with all routes and middleware
pub fn create_router(pool: SqlitePool, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(pool.clone())
        .merge(features::router(pool))
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

async fn root() -> StatusCode {
    StatusCode::OK
}

async fn health(State(pool): State<SqlitePool>) -> ApiResult<Json<Value>> {
    db::health_check(&pool)
        .await
        .map_err(|e| ApiError::Unavailable(format!("database health check failed: {}", e)))?;

    Ok(Json(json!({
        "status": "healthy",
        "database": "connected"
    })))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, starting graceful shutdown");
        },
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! course-service server.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use course_service::{
    api::{self, AppState, DOCS_PATH},
    config::{Config, StorageBackend},
    storage::MemoryCourseRepository,
    telemetry
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    telemetry::init(config.log_format);

    let app = build_app(&config).await?;

    let addr = config.server.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");
    info!("OpenAPI document: http://{addr}{DOCS_PATH}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn build_app(config: &Config) -> Result<Router> {
    match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory course storage");
            let state = AppState::new(Arc::new(MemoryCourseRepository::new()))
                .with_validation_format(config.validation_format);
            Ok(api::app(state))
        }
        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            use course_service::storage::postgres::{self, PostgresCourseRepository};

            let pool = postgres::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            info!(
                max_connections = config.database.max_connections,
                "Connected to PostgreSQL"
            );
            let state = AppState::new(Arc::new(PostgresCourseRepository::new(pool)))
                .with_validation_format(config.validation_format);
            Ok(api::app(state))
        }
        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => {
            anyhow::bail!("STORAGE=postgres requires the `postgres` feature")
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

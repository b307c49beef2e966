//! HTTP server initialization and runtime setup.
//!
//! Handles storage bootstrap, repository and service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{ResolveService, ShortenService, ShortenSettings};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{CounterRepository, ShortRecordRepository};
use crate::infrastructure::persistence::{
    MemoryCounterRepository, MemoryShortRecordRepository, PgCounterRepository,
    PgShortRecordRepository,
};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::encoding::Alphabet;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage (PostgreSQL pool + migrations, or in-memory repositories)
/// - Counter bootstrap (idempotent)
/// - Shortening and resolution services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migration run, counter
/// bootstrap, or server bind fails.
pub async fn run(config: Config) -> Result<()> {
    let (records, counter) = build_repositories(&config).await?;

    counter
        .ensure_initialized(config.counter_initial)
        .await
        .context("Failed to bootstrap the allocation counter")?;

    let settings = ShortenSettings {
        alphabet: Alphabet::new(&config.alphabet)?,
        min_code_length: config.min_code_length,
        base_url: config.base_url.clone(),
        default_expiry: config.default_expiry_seconds.map(Duration::seconds),
    };

    let shorten_service = Arc::new(ShortenService::new(
        Arc::clone(&records),
        counter,
        settings,
    ));
    let resolve_service = Arc::new(ResolveService::new(Arc::clone(&records)));

    let state = AppState::new(shorten_service, resolve_service, records);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Builds the repository pair for the configured storage backend.
async fn build_repositories(
    config: &Config,
) -> Result<(Arc<dyn ShortRecordRepository>, Arc<dyn CounterRepository>)> {
    match config.storage {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when STORAGE is 'postgres'")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(std::time::Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(std::time::Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(std::time::Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let pool = Arc::new(pool);
            Ok((
                Arc::new(PgShortRecordRepository::new(Arc::clone(&pool))),
                Arc::new(PgCounterRepository::new(pool)),
            ))
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage (records are lost on restart)");
            Ok((
                Arc::new(MemoryShortRecordRepository::new()),
                Arc::new(MemoryCounterRepository::new()),
            ))
        }
    }
}

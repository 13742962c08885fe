//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, worker spawning, and Axum server lifecycle.

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{PgStatsRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or NullCache when Redis is not configured)
/// - Background click worker
/// - Axum HTTP server with graceful shutdown
///
/// Shutdown closes the listener, finishes in-flight requests, then drops
/// the click channel and waits for the worker to drain buffered events.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - A configured Redis endpoint does not answer
/// - Server bind fails
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache: Arc<dyn CacheService> = match &config.redis_url {
        Some(redis_url) => {
            let redis = RedisCache::connect(redis_url)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        None => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    };

    let pool = Arc::new(pool);
    let url_repository: Arc<dyn crate::domain::repositories::UrlRepository> =
        Arc::new(PgUrlRepository::new(pool.clone()));
    let stats_repository: Arc<dyn crate::domain::repositories::StatsRepository> =
        Arc::new(PgStatsRepository::new(pool));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    let worker = tokio::spawn(run_click_worker(click_rx, stats_repository.clone()));

    let state = AppState {
        link_service: Arc::new(LinkService::new(
            url_repository.clone(),
            cache.clone(),
            config.base_url.clone(),
        )),
        redirect_service: Arc::new(RedirectService::new(
            url_repository.clone(),
            cache.clone(),
            click_tx,
        )),
        stats_service: Arc::new(StatsService::new(url_repository.clone(), stats_repository)),
        url_repository,
        cache,
        admin_key: config.admin_key.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The server future owned the last click sender; with it gone the
    // channel is closed and the worker exits once the queue is empty.
    tracing::info!("Server stopped, draining click queue");
    worker.await?;

    Ok(())
}

/// Resolves when SIGINT (Ctrl+C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

//! HTTP server initialization and runtime setup.
//!
//! Builds the mapping store and shortener, then runs the Axum server until a
//! shutdown signal arrives.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::UrlStore;
use crate::domain::shortener::Shortener;
use crate::infrastructure::store::{InMemoryUrlStore, RedisUrlStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (in-memory, or Redis with a startup PING)
/// - Shortener from the configured domain, width and counter
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Redis is selected but unreachable (no fallback: minted suffixes would
///   otherwise vanish on restart)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await?;

    let shortener = Arc::new(Shortener::new(config.shortener_config()));
    info!(
        "Shortener ready (domain {}, counter {})",
        shortener.domain(),
        shortener.counter()
    );

    let state = AppState::new(shortener, store);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Creates the store selected by `STORE_BACKEND`.
///
/// # Errors
///
/// Returns an error if the Redis store cannot be reached within the
/// configured timeout.
pub async fn build_store(config: &Config) -> Result<Arc<dyn UrlStore>> {
    match (config.store_backend, &config.redis_url) {
        (StoreBackend::Redis, Some(redis_url)) => {
            let store =
                RedisUrlStore::connect(redis_url, config.store_timeout(), &config.redis_key_prefix)
                    .await
                    .context("Failed to initialize Redis url store")?;
            info!("Store: redis");
            Ok(Arc::new(store))
        }
        (StoreBackend::Redis, None) => {
            anyhow::bail!("STORE_BACKEND=redis requires REDIS_URL or REDIS_HOST")
        }
        (StoreBackend::Memory, _) => {
            info!("Store: in-memory (mappings are lost on restart)");
            Ok(Arc::new(InMemoryUrlStore::new()))
        }
    }
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

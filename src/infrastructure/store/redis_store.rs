//! Redis-backed mapping store.

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::repositories::UrlStore;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info};

/// Per-call timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis [`UrlStore`]: one `SET suffix url` per mapping, no TTL.
///
/// Every command is bounded by `timeout`. A timeout surfaces as
/// [`StoreError::Unavailable`]; nothing is retried.
pub struct RedisUrlStore {
    client: ConnectionManager,
    timeout: Duration,
    key_prefix: String,
}

impl RedisUrlStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - connection string (e.g. `"redis://localhost:6379/0"`)
    /// - `timeout` - bound applied to the connect, the PING, and every later call
    /// - `key_prefix` - namespace prepended to suffixes; empty stores bare suffixes
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established in time, or the PING fails.
    pub async fn connect(
        redis_url: &str,
        timeout: Duration,
        key_prefix: impl Into<String>,
    ) -> StoreResult<Self> {
        info!("Connecting to Redis url store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                StoreError::Unavailable(format!(
                    "Timed out connecting to Redis after {:?}",
                    timeout
                ))
            })?
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            client: manager,
            timeout,
            key_prefix: key_prefix.into(),
        };

        let mut conn = store.client.clone();
        store
            .bounded(conn.ping::<()>())
            .await
            .map_err(|e| StoreError::Unavailable(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    /// Constructs the Redis key for a suffix.
    fn build_key(&self, suffix: &str) -> String {
        format!("{}{}", self.key_prefix, suffix)
    }

    /// Runs a Redis command under the configured timeout.
    async fn bounded<T, F>(&self, command: F) -> StoreResult<T>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        match tokio::time::timeout(self.timeout, command).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) if e.is_io_error() || e.is_connection_dropped() => {
                Err(StoreError::Unavailable(e.to_string()))
            }
            Ok(Err(e)) => Err(StoreError::Operation(e.to_string())),
            Err(_) => Err(StoreError::Unavailable(format!(
                "timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

#[async_trait]
impl UrlStore for RedisUrlStore {
    async fn save(&self, suffix: &str, base_url: &str) -> StoreResult<()> {
        let key = self.build_key(suffix);
        let mut conn = self.client.clone();

        self.bounded(conn.set::<_, _, ()>(&key, base_url))
            .await
            .inspect_err(|e| error!("Redis SET error for {}: {}", suffix, e))?;

        debug!("Store SET: {} -> {}", suffix, base_url);
        Ok(())
    }

    async fn load(&self, suffix: &str) -> StoreResult<Option<String>> {
        let key = self.build_key(suffix);
        let mut conn = self.client.clone();

        let value = self
            .bounded(conn.get::<_, Option<String>>(&key))
            .await
            .inspect_err(|e| error!("Redis GET error for {}: {}", suffix, e))?;

        match &value {
            Some(url) => debug!("Store HIT: {} -> {}", suffix, url),
            None => debug!("Store MISS: {}", suffix),
        }

        Ok(value)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        self.bounded(conn.ping::<()>()).await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

//! Storage contract for suffix → base URL mappings.

use crate::domain::errors::StoreResult;
use async_trait::async_trait;

/// Key-value persistence for minted suffixes.
///
/// Uniqueness is not enforced here: suffixes are unique because the
/// shortener's counter never repeats, so `save` is a plain upsert.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryUrlStore`] - process-local map
/// - [`crate::infrastructure::store::RedisUrlStore`] - Redis with per-call timeout
/// - Test mocks available with `cfg(test)`
///
/// # Ordering
///
/// A `load` only observes a `save` of the same key if the caller awaited the
/// `save` first. There is no cross-key isolation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Stores `base_url` under `suffix`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::errors::StoreError`] when the backend is
    /// unreachable, times out, or rejects the command.
    async fn save(&self, suffix: &str, base_url: &str) -> StoreResult<()>;

    /// Looks up the base URL for `suffix`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the key exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Backend failures and timeouts are reported as errors, never as a miss.
    async fn load(&self, suffix: &str) -> StoreResult<Option<String>>;

    /// Reports whether the backend currently answers.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}

//! Process-local mapping store.

use crate::domain::errors::StoreResult;
use crate::domain::repositories::UrlStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// A [`UrlStore`] backed by a mutex-guarded `HashMap`.
///
/// Mappings live as long as the process. Used for development, tests, and
/// single-instance deployments without Redis.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory url store");
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UrlStore for InMemoryUrlStore {
    async fn save(&self, suffix: &str, base_url: &str) -> StoreResult<()> {
        self.entries()
            .insert(suffix.to_string(), base_url.to_string());
        Ok(())
    }

    async fn load(&self, suffix: &str) -> StoreResult<Option<String>> {
        Ok(self.entries().get(suffix).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

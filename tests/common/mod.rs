#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use counter_shortener::domain::errors::{StoreError, StoreResult};
use counter_shortener::domain::repositories::UrlStore;
use counter_shortener::domain::shortener::{Shortener, ShortenerConfig};
use counter_shortener::infrastructure::store::InMemoryUrlStore;
use counter_shortener::routes::router;
use counter_shortener::state::AppState;
use std::sync::Arc;

/// Store that fails every call, standing in for an unreachable Redis.
pub struct DownStore;

#[async_trait]
impl UrlStore for DownStore {
    async fn save(&self, _suffix: &str, _base_url: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("timed out after 5s".to_string()))
    }

    async fn load(&self, _suffix: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Unavailable("timed out after 5s".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlStore>) {
    create_test_state_with(ShortenerConfig::default())
}

pub fn create_test_state_with(config: ShortenerConfig) -> (AppState, Arc<InMemoryUrlStore>) {
    let store = Arc::new(InMemoryUrlStore::new());
    let state = AppState::new(Arc::new(Shortener::new(config)), store.clone());
    (state, store)
}

pub fn create_down_state() -> AppState {
    AppState::new(Arc::new(Shortener::with_defaults()), Arc::new(DownStore))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

//! Mapping store implementations.
//!
//! Both implement [`crate::domain::repositories::UrlStore`]:
//! - [`InMemoryUrlStore`] - mutex-guarded map
//! - [`RedisUrlStore`] - Redis with a bounded per-call timeout

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryUrlStore;
pub use redis_store::{DEFAULT_TIMEOUT, RedisUrlStore};

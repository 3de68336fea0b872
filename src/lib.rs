//! # Counter Shortener
//!
//! A URL shortener that mints fixed-width base-62 suffixes from a
//! monotonically increasing counter, built with Axum and Redis.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Encoder, validator, shortener, store trait
//! - **Application Layer** ([`application`]) - Link service composing shortener and store
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and Redis stores
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTMX form flow and redirects
//!
//! ## Behaviour
//!
//! - Suffixes are `encode(counter)` after incrementing, so a fresh service
//!   starting at 500 hands out `encode(501)` first
//! - The same URL submitted twice gets two suffixes
//! - Minting stops with an error once the counter reaches its ceiling
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory store
//! cargo run
//!
//! # Redis store
//! export STORE_BACKEND=redis
//! export REDIS_URL="redis://localhost:6379/0"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::UrlPair;
    pub use crate::domain::errors::{InvalidUrlReason, ShortenError, StoreError};
    pub use crate::domain::repositories::UrlStore;
    pub use crate::domain::shortener::{Shortener, ShortenerConfig};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryUrlStore, RedisUrlStore};
    pub use crate::state::AppState;
}

//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Landing page with the shorten form
//! - `POST /shorten`          - Form shorten, HTML fragment response
//! - `GET  /expand/{suffix}`  - Redirect / `HX-Redirect` to the base URL
//! - `GET  /{suffix}`         - Same redirect, short form
//! - `GET  /health`           - Store health check
//! - `/api/v1/*`              - JSON API
//! - `/static/*`              - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// All routes with state and tracing applied.
///
/// Static paths (`/health`, `/shorten`, `/api/...`) take priority over the
/// `/{suffix}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] behind trailing-slash
/// normalization, so `/api/v1/expand/abc/` reaches the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

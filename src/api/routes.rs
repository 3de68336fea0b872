//! Versioned JSON API routes.

use crate::api::handlers::{expand_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /v1/shorten`          - Mint a suffix for `{"baseURL"}`
/// - `GET  /v1/expand/{suffix}`  - Resolve a suffix to its pair
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/shorten", post(shorten_handler))
        .route("/v1/expand/{suffix}", get(expand_handler))
}

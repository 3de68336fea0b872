//! Browser / HTMX route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, redirect_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Form-flow routes.
///
/// # Endpoints
///
/// - `GET  /`                 - Landing page with the shorten form
/// - `POST /shorten`          - Shorten `base-url`, returns an HTML fragment
/// - `GET  /expand/{suffix}`  - Redirect (or `HX-Redirect`) to the base URL
/// - `GET  /{suffix}`         - Same as above, short form
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_form_handler))
        .route("/expand/{suffix}", get(redirect_handler))
        .route("/{suffix}", get(redirect_handler))
}

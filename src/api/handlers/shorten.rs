//! Handler for the JSON shorten endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;

use crate::api::dto::shorten::ShortenRequest;
use crate::domain::entities::UrlPair;
use crate::error::AppError;
use crate::state::AppState;

/// Mints a suffix for one URL and stores the mapping.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "baseURL": "google.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortSuffix": "0000085",
///   "baseURL": "google.com",
///   "domain": "example.com/"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON, or the URL is empty or
///   has no domain
/// - 500 Internal Server Error if the counter is exhausted
/// - 503 Service Unavailable if the store cannot be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<UrlPair>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    let pair = state.link_service.shorten(&payload.base_url).await?;
    Ok(Json(pair))
}

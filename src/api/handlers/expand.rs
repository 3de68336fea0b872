//! Handler for the JSON expand endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::UrlPair;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a suffix to its base URL.
///
/// # Endpoint
///
/// `GET /api/v1/expand/{suffix}`
///
/// # Errors
///
/// - 404 Not Found if the suffix is unknown or the store read fails
pub async fn expand_handler(
    Path(suffix): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlPair>, AppError> {
    let pair = state.link_service.expand(&suffix).await?;
    Ok(Json(pair))
}

//! Form-based shorten handler returning HTML fragments.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::domain::entities::UrlPair;
use crate::error::AppError;
use crate::state::AppState;

/// Form body posted by `templates/index.html`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(rename = "base-url", default)]
    pub base_url: String,
}

/// Fragment showing a freshly minted pair.
#[derive(Template, WebTemplate)]
#[template(path = "url_pair.html")]
pub struct UrlPairTemplate {
    pub pair: UrlPair,
}

/// Fragment echoing rejected input with the reason.
#[derive(Template, WebTemplate)]
#[template(path = "invalid_user_input.html")]
pub struct InvalidUserInputTemplate {
    pub pair: UrlPair,
    pub error: String,
}

/// Shortens the submitted `base-url` and renders the result fragment.
///
/// # Endpoint
///
/// `POST /shorten` (`application/x-www-form-urlencoded`)
///
/// # Responses
///
/// - 200 with `url_pair.html` on success
/// - 200 with `invalid_user_input.html` for empty or domain-less input, so
///   HTMX swaps the message into the page
/// - the error's own status (500/503) with the same fragment otherwise
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Response {
    match state.link_service.shorten(&form.base_url).await {
        Ok(pair) => UrlPairTemplate { pair }.into_response(),
        Err(err) => {
            let status = match err {
                AppError::Validation { .. } => StatusCode::OK,
                _ => err.status(),
            };
            let error = err.message().to_string();
            let pair = UrlPair::rejected(form.base_url, state.link_service.domain(), &error);

            (status, InvalidUserInputTemplate { pair, error }).into_response()
        }
    }
}

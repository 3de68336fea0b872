//! Browser-facing suffix resolution.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::state::AppState;
use crate::web::middleware::HxRequest;
use crate::web::middleware::htmx::HX_REDIRECT;

/// Error page for unknown suffixes and store failures.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub status: u16,
    pub message: String,
}

/// Redirects a suffix to its base URL.
///
/// # Endpoints
///
/// - `GET /{suffix}`
/// - `GET /expand/{suffix}`
///
/// # Behaviour
///
/// - HTMX request: 200 with `HX-Redirect: <url>`
/// - Otherwise: 307 Temporary Redirect
/// - Unknown suffix or failed store read: 404 error page
pub async fn redirect_handler(
    Path(suffix): Path<String>,
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Response {
    let pair = match state.link_service.expand(&suffix).await {
        Ok(pair) => pair,
        Err(err) => {
            let status = err.status();
            return (
                status,
                ErrorPageTemplate {
                    status: status.as_u16(),
                    message: err.message().to_string(),
                },
            )
                .into_response();
        }
    };

    let target = redirect_target(&pair.base_url);
    debug!("Redirecting {} -> {}", suffix, target);

    if is_htmx {
        return match HeaderValue::from_str(&target) {
            Ok(value) => (
                StatusCode::OK,
                [(HeaderName::from_static(HX_REDIRECT), value)],
            )
                .into_response(),
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorPageTemplate {
                    status: 500,
                    message: "Stored URL cannot be sent as a redirect header".to_string(),
                },
            )
                .into_response(),
        };
    }

    Redirect::temporary(&target).into_response()
}

/// Location to send the browser to.
///
/// Stored URLs are kept verbatim, so scheme-less ones like `google.com` get
/// `https://` here; otherwise the browser would resolve them relative to us.
pub fn redirect_target(base_url: &str) -> String {
    if base_url.contains("://") {
        base_url.to_string()
    } else {
        format!("https://{}", base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_target_adds_scheme() {
        assert_eq!(redirect_target("google.com"), "https://google.com");
    }

    #[test]
    fn test_redirect_target_keeps_existing_scheme() {
        assert_eq!(
            redirect_target("http://example.com/path"),
            "http://example.com/path"
        );
    }
}

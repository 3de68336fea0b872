//! HTMX request detection.

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Header HTMX sets on every request it issues.
pub const HX_REQUEST: &str = "hx-request";
/// Response header telling HTMX to navigate the browser.
pub const HX_REDIRECT: &str = "hx-redirect";

/// Whether the request came from HTMX (`HX-Request: true`).
///
/// HTMX follows a 3xx itself and swaps the target page into the DOM, so
/// redirects for HTMX callers are sent as `HX-Redirect` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get(HX_REQUEST)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));

        Ok(Self(is_htmx))
    }
}

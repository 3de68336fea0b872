//! DTOs for the shorten endpoint.

use serde::Deserialize;

/// Request to shorten one URL.
///
/// The response body is a [`crate::domain::entities::UrlPair`].
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten. Missing is treated like empty.
    #[serde(rename = "baseURL", default)]
    pub base_url: String,
}

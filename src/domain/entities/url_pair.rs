//! Short suffix / base URL pair returned to HTTP callers.

use serde::{Deserialize, Serialize};

/// A minted or resolved mapping, with the domain it is served under.
///
/// `error` is only set when the pair is rendered back to the user alongside
/// a failure (e.g. the form flow echoing rejected input).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPair {
    #[serde(rename = "shortSuffix")]
    pub short_suffix: String,

    #[serde(rename = "baseURL")]
    pub base_url: String,

    pub domain: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UrlPair {
    pub fn new(
        short_suffix: impl Into<String>,
        base_url: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            short_suffix: short_suffix.into(),
            base_url: base_url.into(),
            domain: domain.into(),
            error: None,
        }
    }

    /// Pair describing rejected input, with no suffix.
    pub fn rejected(
        base_url: impl Into<String>,
        domain: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            short_suffix: String::new(),
            base_url: base_url.into(),
            domain: domain.into(),
            error: Some(error.into()),
        }
    }

    /// Full short link, `domain` followed by the suffix.
    pub fn short_url(&self) -> String {
        format!("{}{}", self.domain, self.short_suffix)
    }
}

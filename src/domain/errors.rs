//! Error types raised by the suffix-minting core and the mapping store.

use std::fmt;
use thiserror::Error;

/// Why a submitted URL was rejected before consuming a counter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlReason {
    EmptyUrl,
    NoDomain,
}

impl InvalidUrlReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyUrl => "can't shorten empty url",
            Self::NoDomain => "can't shorten url without a domain",
        }
    }
}

impl fmt::Display for InvalidUrlReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Failures of [`crate::domain::shortener::Shortener::shorten_url`].
///
/// Both variants are detected before any state is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error("invalid url {reason}, {submitted_url:?}")]
    InvalidUrl {
        reason: InvalidUrlReason,
        submitted_url: String,
    },

    /// The counter reached its ceiling. Recovering needs a wider suffix or a
    /// new ceiling, so callers should not retry.
    #[error("counter limit exceeded: current count {current}, max count {max}")]
    CounterExceeded { current: u64, max: u64 },
}

impl ShortenError {
    pub fn invalid_url(reason: InvalidUrlReason, submitted_url: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason,
            submitted_url: submitted_url.into(),
        }
    }
}

/// Failures of a [`crate::domain::repositories::UrlStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backend unreachable or the call exceeded its timeout.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store operation failed: {0}")]
    Operation(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = ShortenError::invalid_url(InvalidUrlReason::NoDomain, "google");
        assert_eq!(
            err.to_string(),
            "invalid url can't shorten url without a domain, \"google\""
        );
    }

    #[test]
    fn test_counter_exceeded_display() {
        let err = ShortenError::CounterExceeded {
            current: 10,
            max: 10,
        };
        assert_eq!(
            err.to_string(),
            "counter limit exceeded: current count 10, max count 10"
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Unavailable("timed out after 5s".to_string());
        assert_eq!(err.to_string(), "store unavailable: timed out after 5s");
    }
}

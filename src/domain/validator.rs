//! Cheap pre-mint URL checks.
//!
//! This is a heuristic domain-presence test, not URL parsing: anything
//! non-empty that contains a `.` is accepted as-is.

use crate::domain::errors::{InvalidUrlReason, ShortenError};

/// Rejects input that should not consume a counter slot.
///
/// # Errors
///
/// - [`InvalidUrlReason::EmptyUrl`] for an empty string
/// - [`InvalidUrlReason::NoDomain`] when the input has no `.`
pub fn validate_url(url: &str) -> Result<(), ShortenError> {
    if url.is_empty() {
        return Err(ShortenError::invalid_url(InvalidUrlReason::EmptyUrl, url));
    }

    if !url.contains('.') {
        return Err(ShortenError::invalid_url(InvalidUrlReason::NoDomain, url));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_empty_url() {
        let err = validate_url("").unwrap_err();
        assert_eq!(err, ShortenError::invalid_url(InvalidUrlReason::EmptyUrl, ""));
    }

    #[test]
    fn test_validate_no_domain() {
        let err = validate_url("google").unwrap_err();
        assert_eq!(
            err,
            ShortenError::invalid_url(InvalidUrlReason::NoDomain, "google")
        );
    }

    #[test]
    fn test_validate_accepts_bare_domain() {
        assert!(validate_url("google.com").is_ok());
    }

    #[test]
    fn test_validate_does_not_normalize() {
        assert!(validate_url("https://EXAMPLE.com:443/a path").is_ok());
        assert!(validate_url(".").is_ok());
    }

    #[test]
    fn test_validate_scheme_without_dot_is_rejected() {
        assert!(validate_url("http://localhost").is_err());
    }
}

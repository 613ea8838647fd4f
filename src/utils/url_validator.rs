//! Long URL syntax validation.

use url::Url;

/// Reasons a long URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no network location")]
    MissingHost,
}

/// Checks that `input` is an absolute URL with both a scheme and a network
/// location, e.g. `https://example.com/page`.
///
/// The URL is not normalized: the exact string submitted is what gets hashed
/// and stored, so surrounding whitespace is rejected rather than trimmed.
/// The authority must be written out as `scheme://host`; forms such as
/// `http:example.com` that the WHATWG parser would repair are rejected.
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim() != input {
        return Err(UrlValidationError::InvalidFormat(
            "leading or trailing whitespace".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    let has_authority = input
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority {
        return Err(UrlValidationError::MissingHost);
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

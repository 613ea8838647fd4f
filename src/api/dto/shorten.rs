//! DTOs for link shortening endpoint.

use serde::Deserialize;

/// Request to shorten a long URL.
///
/// `long-url` is optional at the type level so that an absent field can be
/// reported with its own message rather than a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(rename = "long-url")]
    pub long_url: Option<String>,
}

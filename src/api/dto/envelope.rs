//! Response envelope shared by every endpoint.

use serde::Serialize;

use crate::utils::timestamp::current_timestamp;

/// Envelope wrapping all response payloads, successful or not.
///
/// ```json
/// {
///   "response-timestamp": "2026/10/15T09:30:12:004512",
///   "response-data": "a1b2c3d151026"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApplicationResponse<T: Serialize> {
    pub response_timestamp: String,
    pub response_data: T,
}

impl<T: Serialize> ApplicationResponse<T> {
    /// Wraps `response_data`, stamped with the current time.
    pub fn new(response_data: T) -> Self {
        Self {
            response_timestamp: current_timestamp(),
            response_data,
        }
    }
}

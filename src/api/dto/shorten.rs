//! DTOs for the short URL creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateShortUrlRequest {
    /// The original URL. `https://` is prepended when no scheme is given.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Lifetime in minutes. Missing or non-positive means 30 minutes.
    #[serde(default)]
    pub validity: Option<i64>,

    /// Optional custom short code (4-20 alphanumeric characters).
    #[serde(default)]
    pub shortcode: Option<String>,
}

impl CreateShortUrlRequest {
    /// Treats an empty `shortcode` the same as a missing one.
    pub fn custom_code(&self) -> Option<&str> {
        self.shortcode.as_deref().filter(|code| !code.is_empty())
    }
}

/// Response for a created short URL.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    /// Expiry as an RFC3339 timestamp.
    pub expiry: String,
}

//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Source recorded when a redirect arrives without a `Referer` header.
pub const DIRECT_SOURCE: &str = "direct";

/// Location recorded when the client location cannot be determined.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// A click event recorded when a short code is resolved.
///
/// Clicks are appended to a record's history and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Click {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(timestamp: DateTime<Utc>, source: String, location: String) -> Self {
        Self {
            timestamp,
            source,
            location,
        }
    }
}

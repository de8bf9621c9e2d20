//! DTOs for health check endpoint.

use serde::{Deserialize, Serialize};

/// Liveness response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
    /// Current server time, RFC3339.
    pub time: String,
}

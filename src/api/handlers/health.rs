//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;
use crate::infrastructure::audit::AuditPackage;
use crate::state::AppState;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// Does not touch the registry.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "message": "URL Shortener service is running",
///   "version": "0.1.0",
///   "time": "2025-01-01T00:00:00Z"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    state
        .audit
        .debug(AuditPackage::Handler, "GET /health - Health check");

    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "URL Shortener service is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

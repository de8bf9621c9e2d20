//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::infrastructure::audit::AuditPackage;
use crate::state::AppState;

/// Retrieves statistics for a short code.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// ```json
/// {
///   "totalClicks": 1,
///   "createdAt": "2025-01-01T00:00:00Z",
///   "expiresAt": "2025-01-01T00:30:00Z",
///   "clicks": [
///     { "timestamp": "2025-01-01T00:05:00Z", "source": "direct", "location": "unknown" }
///   ]
/// }
/// ```
///
/// Statistics remain available after the code expires.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    state.audit.info(
        AuditPackage::Handler,
        format!("GET /shorturls/{} - Getting stats", code),
    );

    let stats = state.stats_service.get_stats(&code)?;

    state.audit.info(
        AuditPackage::Handler,
        format!(
            "Stats retrieved for {}: {} clicks",
            code, stats.total_clicks
        ),
    );

    Ok(Json(stats.into()))
}

//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::infrastructure::audit::AuditPackage;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (fails when unknown or expired)
/// 2. Record a click with the `Referer` header as source (`"direct"` if absent)
/// 3. Return 307 Temporary Redirect
///
/// A failed click record is logged and does not block the redirect.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the short code has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Redirect, AppError> {
    state
        .audit
        .info(AuditPackage::Handler, format!("GET /{} - Redirecting", code));

    let referer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    let original_url = state
        .link_service
        .resolve_and_track(&code, referer)
        .inspect_err(|e| {
            state.audit.error(
                AuditPackage::Handler,
                format!("Redirect failed for {}: {}", code, e),
            );
        })?;

    debug!("Redirecting {} -> {}", code, original_url);
    state.audit.info(
        AuditPackage::Handler,
        format!("Redirecting {} -> {}", code, original_url),
    );

    Ok(Redirect::temporary(&original_url))
}

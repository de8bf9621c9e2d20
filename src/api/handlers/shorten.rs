//! Handler for the short URL creation endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::SecondsFormat;
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::api::routes::is_reserved_code;
use crate::error::AppError;
use crate::infrastructure::audit::AuditPackage;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/very/long/path",
///   "validity": 60,        // optional, minutes (default 30)
///   "shortcode": "promo24" // optional, 4-20 alphanumeric characters
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/promo24",
///   "expiry": "2025-01-01T01:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an unparsable body, a missing or invalid
/// URL, an invalid short code or an out-of-range validity.
/// Returns 409 Conflict if the custom short code is already taken or
/// collides with a static route (`health`, `shorturls`).
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    state.audit.info(
        AuditPackage::Handler,
        "POST /shorturls - Creating short URL",
    );

    let Json(payload) = payload.inspect_err(|e| {
        state.audit.error(
            AuditPackage::Handler,
            format!("Invalid JSON: {}", e.body_text()),
        );
    })?;

    if let Err(e) = payload.validate() {
        state
            .audit
            .error(AuditPackage::Handler, "Missing URL field");
        return Err(e.into());
    }

    if let Some(code) = payload.custom_code()
        && is_reserved_code(code)
    {
        state.audit.error(
            AuditPackage::Handler,
            format!("Short code is reserved: {}", code),
        );
        return Err(AppError::conflict(
            "Short code is reserved",
            json!({ "shortcode": code }),
        ));
    }

    let created = state
        .link_service
        .create_short_link(&payload.url, payload.validity, payload.custom_code())
        .inspect_err(|e| {
            state.audit.error(
                AuditPackage::Handler,
                format!("Failed to create short URL: {}", e),
            );
        })?;

    let short_link = state.link_service.get_short_url(&created.code);
    state.audit.info(
        AuditPackage::Handler,
        format!("Short URL created successfully: {}", short_link),
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            short_link,
            expiry: created
                .expires_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }),
    ))
}

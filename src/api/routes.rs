//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Path segments served by static routes.
///
/// A short code equal to one of these would be shadowed by its route and
/// could never be redirected.
pub const RESERVED_CODES: &[&str] = &["health", "shorturls"];

/// Returns whether `code` collides with a static route.
///
/// Routing is case-sensitive, so only exact matches are reserved.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Short URL management routes.
///
/// # Endpoints
///
/// - `POST /shorturls`        - Create a short URL
/// - `GET  /shorturls/{code}` - Statistics for a short code
pub fn shorturl_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{code}", get(stats_handler))
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`        - Create a short URL
//! - `GET  /shorturls/{code}` - Click statistics
//! - `GET  /health`           - Liveness check
//! - `GET  /{code}`           - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Audit** - One audit line per request, shipped best-effort
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{audit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/shorturls/` and
/// `/shorturls` hit the same handler.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(base_router(state))
}

/// Routes and middleware without path normalization.
///
/// Static routes (`/health`, `/shorturls`) take precedence over the
/// `/{code}` capture, so those names can never be resolved as short codes.
pub fn base_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::shorturl_routes())
        .route("/{code}", get(redirect_handler))
        .layer(middleware::from_fn_with_state(state.clone(), audit::layer))
        .with_state(state)
        .layer(tracing::layer())
}

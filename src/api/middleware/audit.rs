//! Route-level audit middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::infrastructure::audit::AuditPackage;
use crate::state::AppState;

/// Emits a `"<METHOD> <path>"` audit line for every request.
///
/// The line is queued before the request is handled and never affects the
/// response.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/health", get(health_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), audit::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    st.audit.info(
        AuditPackage::Route,
        format!("{} {}", req.method(), req.uri().path()),
    );

    next.run(req).await
}

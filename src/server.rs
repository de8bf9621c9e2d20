//! HTTP server initialization and runtime setup.
//!
//! Handles audit sink setup, the optional expiry sweeper, and the Axum
//! server lifecycle including graceful shutdown.

use crate::config::Config;
use crate::domain::registry::Registry;
use crate::domain::sweeper::run_expiry_sweeper;
use crate::infrastructure::audit::{
    AuditLevel, AuditLogger, AuditPackage, AuditSink, HttpAuditSink, NullAuditSink,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory registry
/// - Audit sink (HTTP or NullAuditSink fallback) and its queue worker
/// - Expiry sweeper, when `PURGE_AFTER_MINUTES` is set
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(Registry::new());
    let audit = build_audit_logger(&config);

    match audit
        .log_now(
            AuditLevel::Info,
            AuditPackage::Service,
            "URL Shortener service starting",
        )
        .await
    {
        Ok(()) if config.is_audit_enabled() => tracing::info!("Audit endpoint reachable"),
        Ok(()) => {}
        Err(e) => tracing::warn!("Audit endpoint unreachable: {}. Continuing without it.", e),
    }

    if let Some(minutes) = config.purge_after_minutes {
        tokio::spawn(run_expiry_sweeper(
            registry.clone(),
            chrono::Duration::try_minutes(minutes).unwrap_or(chrono::Duration::MAX),
            Duration::from_secs(config.purge_interval_seconds),
        ));
        tracing::info!("Expiry sweeper started");
    }

    let state = AppState::new(registry, audit.clone(), config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    audit.info(
        AuditPackage::Service,
        format!("Server listening on {}", addr),
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    // Sent directly: queued entries are not flushed on exit.
    if let Err(e) = audit
        .log_now(AuditLevel::Info, AuditPackage::Service, "Server shutting down")
        .await
    {
        tracing::warn!("Failed to ship shutdown audit entry: {}", e);
    }

    Ok(())
}

fn build_audit_logger(config: &Config) -> AuditLogger {
    let sink: Arc<dyn AuditSink> = if let Some(endpoint) = &config.audit_log_url {
        match HttpAuditSink::new(
            endpoint.clone(),
            config.audit_log_token.clone(),
            Duration::from_secs(config.audit_timeout_seconds),
        ) {
            Ok(sink) => Arc::new(sink),
            Err(e) => {
                tracing::warn!("Failed to set up audit sink: {}. Using NullAuditSink.", e);
                Arc::new(NullAuditSink::new())
            }
        }
    } else {
        tracing::info!("Audit log disabled (NullAuditSink)");
        Arc::new(NullAuditSink::new())
    };

    AuditLogger::spawn(sink, config.audit_queue_capacity)
}

/// Resolves when the process receives Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

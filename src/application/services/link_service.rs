//! Short link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{CreatedShortUrl, DIRECT_SOURCE, UNKNOWN_LOCATION};
use crate::domain::registry::Registry;
use crate::error::AppError;
use crate::infrastructure::audit::{AuditLogger, AuditPackage};

/// Service for creating and resolving short links.
///
/// Wraps the [`Registry`] with audit logging and short link formatting.
/// Audit calls are fire-and-forget and never change the outcome of an
/// operation.
pub struct LinkService {
    registry: Arc<Registry>,
    audit: AuditLogger,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of returned short links, e.g.
    /// `http://localhost:3000`.
    pub fn new(registry: Arc<Registry>, audit: AuditLogger, base_url: impl Into<String>) -> Self {
        Self {
            registry,
            audit,
            base_url: base_url.into(),
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - The original URL; `https://` is prepended when no scheme is given
    /// - `validity_minutes` - Lifetime in minutes (default 30 when absent or non-positive)
    /// - `custom_code` - Optional custom short code (4-20 alphanumeric characters)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid URL, short code or validity.
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Internal`] if no free code could be generated.
    pub fn create_short_link(
        &self,
        url: &str,
        validity_minutes: Option<i64>,
        custom_code: Option<&str>,
    ) -> Result<CreatedShortUrl, AppError> {
        self.audit.info(AuditPackage::Service, "Creating short URL");

        match self.registry.create(url, validity_minutes, custom_code) {
            Ok(created) => {
                info!(code = %created.code, url = %created.original_url, "Short URL created");
                self.audit.info(
                    AuditPackage::Service,
                    format!(
                        "Short URL created: {} -> {}",
                        created.code, created.original_url
                    ),
                );
                Ok(created)
            }
            Err(e) => {
                debug!("Short URL creation rejected: {}", e);
                self.audit.error(AuditPackage::Domain, e.to_string());
                Err(e.into())
            }
        }
    }

    /// Resolves a code for redirection and records the click.
    ///
    /// The click source is the referer, or `"direct"` when absent. Location
    /// is always `"unknown"`. A failed click record is logged and ignored so
    /// the redirect still happens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and [`AppError::Gone`]
    /// for expired ones.
    pub fn resolve_and_track(&self, code: &str, referer: Option<&str>) -> Result<String, AppError> {
        self.audit.info(
            AuditPackage::Service,
            format!("Retrieving original URL for: {}", code),
        );

        let original_url = self.registry.resolve(code).map_err(|e| {
            debug!("Resolve failed for {}: {}", code, e);
            self.audit.warn(AuditPackage::Domain, e.to_string());
            AppError::from(e)
        })?;

        let source = referer
            .filter(|r| !r.is_empty())
            .unwrap_or(DIRECT_SOURCE);

        if let Err(e) = self.registry.record_click(code, source, UNKNOWN_LOCATION) {
            warn!("Failed to record click for {}: {}", code, e);
            self.audit.warn(
                AuditPackage::Handler,
                format!("Failed to record click: {}", e),
            );
        } else {
            self.audit
                .debug(AuditPackage::Service, format!("Click recorded for {}", code));
        }

        Ok(original_url)
    }

    /// Constructs the full short URL for a code.
    pub fn get_short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

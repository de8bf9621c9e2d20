//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::ShortUrlStats;
use crate::domain::registry::Registry;
use crate::error::AppError;
use crate::infrastructure::audit::{AuditLogger, AuditPackage};

/// Service for reading per-code click statistics.
///
/// Statistics stay available after a code expires.
pub struct StatsService {
    registry: Arc<Registry>,
    audit: AuditLogger,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(registry: Arc<Registry>, audit: AuditLogger) -> Self {
        Self { registry, audit }
    }

    /// Returns a snapshot of the statistics for a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub fn get_stats(&self, code: &str) -> Result<ShortUrlStats, AppError> {
        self.audit.info(
            AuditPackage::Service,
            format!("Retrieving stats for: {}", code),
        );

        self.registry.stats(code).map_err(|e| {
            self.audit.error(
                AuditPackage::Domain,
                format!("Shortcode not found for stats: {}", code),
            );
            AppError::from(e)
        })
    }

    /// Number of stored short URLs, expired ones included.
    pub fn total_links(&self) -> usize {
        self.registry.len()
    }
}

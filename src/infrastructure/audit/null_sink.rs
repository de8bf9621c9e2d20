//! No-op audit sink for disabled audit shipping.

use super::sink::{AuditResult, AuditSink, LogEntry};
use async_trait::async_trait;
use tracing::debug;

/// An audit sink that drops every entry.
///
/// Used when `AUDIT_LOG_URL` is not configured and in tests.
pub struct NullAuditSink;

impl NullAuditSink {
    pub fn new() -> Self {
        debug!("Using NullAuditSink (audit shipping disabled)");
        Self
    }
}

impl Default for NullAuditSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditSink for NullAuditSink {
    async fn send(&self, _entry: &LogEntry) -> AuditResult<()> {
        Ok(())
    }
}

//! Best-effort shipping of audit lines to an external log service.
//!
//! Provides an [`AuditSink`] trait with two implementations:
//! - [`HttpAuditSink`] - POSTs JSON entries to `AUDIT_LOG_URL`
//! - [`NullAuditSink`] - No-op implementation for disabled shipping
//!
//! Callers go through [`AuditLogger`], which never blocks or fails the
//! operation it is logging. Entries wait in a bounded queue drained by
//! [`run_audit_worker`].

mod http_sink;
mod logger;
mod null_sink;
mod sink;

pub use http_sink::HttpAuditSink;
pub use logger::{AuditLogger, DEFAULT_AUDIT_QUEUE_CAPACITY, run_audit_worker};
pub use null_sink::NullAuditSink;
pub use sink::{AuditError, AuditLevel, AuditPackage, AuditResult, AuditSink, AuditStack, LogEntry};

#[cfg(test)]
pub use sink::MockAuditSink;

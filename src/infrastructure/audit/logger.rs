//! Fire-and-forget front for audit sinks.
//!
//! Entries go through a bounded queue drained by a single worker task
//! ([`run_audit_worker`]). When the queue is full new entries are dropped,
//! so a slow or unreachable audit endpoint can never pile up work.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use super::null_sink::NullAuditSink;
use super::sink::{AuditError, AuditLevel, AuditPackage, AuditSink, LogEntry};

/// Queue size used when none is configured.
pub const DEFAULT_AUDIT_QUEUE_CAPACITY: usize = 1024;

/// Cheap, cloneable handle used by handlers and services to emit audit lines.
///
/// [`AuditLogger::log`] never blocks and never fails. Sink errors are
/// reported through `tracing` only.
#[derive(Clone)]
pub struct AuditLogger {
    sender: Option<mpsc::Sender<LogEntry>>,
    sink: Arc<dyn AuditSink>,
}

impl AuditLogger {
    /// Creates a logger with a queue of `capacity` entries.
    ///
    /// The returned receiver must be drained by [`run_audit_worker`];
    /// until then entries only fill the queue.
    pub fn new(sink: Arc<dyn AuditSink>, capacity: usize) -> (Self, mpsc::Receiver<LogEntry>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (
            Self {
                sender: Some(tx),
                sink,
            },
            rx,
        )
    }

    /// Creates a logger and spawns its worker on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn(sink: Arc<dyn AuditSink>, capacity: usize) -> Self {
        let (logger, rx) = Self::new(sink.clone(), capacity);
        tokio::spawn(run_audit_worker(rx, sink));
        logger
    }

    /// Logger that discards everything.
    pub fn disabled() -> Self {
        Self {
            sender: None,
            sink: Arc::new(NullAuditSink::new()),
        }
    }

    /// Queues an entry for delivery.
    ///
    /// Empty messages are ignored. A full queue drops the entry with a warning.
    pub fn log(&self, level: AuditLevel, package: AuditPackage, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }

        let Some(sender) = &self.sender else {
            return;
        };

        match sender.try_send(LogEntry::new(level, package, message, Utc::now())) {
            Ok(()) => {}
            Err(TrySendError::Full(entry)) => {
                warn!("Audit queue full, dropping entry: {}", entry.message);
            }
            Err(TrySendError::Closed(_)) => {
                debug!("Audit worker stopped, entry discarded");
            }
        }
    }

    /// Ships an entry directly and waits for the outcome.
    ///
    /// Used at startup and shutdown, bypassing the queue.
    pub async fn log_now(
        &self,
        level: AuditLevel,
        package: AuditPackage,
        message: impl Into<String>,
    ) -> Result<(), AuditError> {
        let entry = LogEntry::new(level, package, message, Utc::now());
        self.sink.send(&entry).await
    }

    pub fn info(&self, package: AuditPackage, message: impl Into<String>) {
        self.log(AuditLevel::Info, package, message);
    }

    pub fn debug(&self, package: AuditPackage, message: impl Into<String>) {
        self.log(AuditLevel::Debug, package, message);
    }

    pub fn warn(&self, package: AuditPackage, message: impl Into<String>) {
        self.log(AuditLevel::Warn, package, message);
    }

    pub fn error(&self, package: AuditPackage, message: impl Into<String>) {
        self.log(AuditLevel::Error, package, message);
    }
}

/// Delivers queued entries one at a time until every logger is dropped.
pub async fn run_audit_worker(mut rx: mpsc::Receiver<LogEntry>, sink: Arc<dyn AuditSink>) {
    while let Some(entry) = rx.recv().await {
        if let Err(e) = sink.send(&entry).await {
            warn!("Failed to ship audit entry: {}", e);
        }
    }
    debug!("Audit worker stopped");
}

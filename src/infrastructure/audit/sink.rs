//! Audit sink trait and log entry types.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// Errors that can occur while shipping an audit entry.
#[derive(Debug)]
pub enum AuditError {
    Transport(String),
    Rejected { status: u16, body: String },
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Audit transport error: {}", e),
            Self::Rejected { status, body } => {
                write!(f, "Audit server error {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for AuditError {}

/// Result type for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

/// Application tier emitting the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStack {
    Backend,
    Frontend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Component that produced the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditPackage {
    Cache,
    Controller,
    CronJob,
    Db,
    Domain,
    Handler,
    Repository,
    Route,
    Service,
}

/// A single audit line as sent to the external log service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub stack: AuditStack,
    pub level: AuditLevel,
    pub package: AuditPackage,
    pub message: String,
    pub time: String,
}

impl LogEntry {
    /// Creates a backend entry timestamped as RFC3339.
    pub fn new(
        level: AuditLevel,
        package: AuditPackage,
        message: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            stack: AuditStack::Backend,
            level,
            package,
            message: message.into(),
            time: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Destination for audit entries.
///
/// Implementations may fail; [`crate::infrastructure::audit::AuditLogger`]
/// is responsible for making sure those failures never reach request
/// handling.
///
/// # Implementations
///
/// - [`crate::infrastructure::audit::HttpAuditSink`] - POSTs JSON to a remote endpoint
/// - [`crate::infrastructure::audit::NullAuditSink`] - Discards everything
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Ships one entry.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError`] on transport failure or a rejecting response.
    async fn send(&self, entry: &LogEntry) -> AuditResult<()>;
}

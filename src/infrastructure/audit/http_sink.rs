//! HTTP audit sink that POSTs JSON entries to a remote log service.

use super::sink::{AuditError, AuditResult, AuditSink, LogEntry};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Ships audit entries to an external HTTP endpoint.
///
/// Each entry is sent as a JSON body. A response status of 400 or above is
/// treated as a rejection and reported with the response body.
pub struct HttpAuditSink {
    client: Client,
    endpoint: String,
    bearer_token: Option<String>,
}

impl HttpAuditSink {
    /// Builds the HTTP client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Transport`] if the client cannot be constructed.
    pub fn new(
        endpoint: impl Into<String>,
        bearer_token: Option<String>,
        timeout: Duration,
    ) -> AuditResult<Self> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuditError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        info!("Audit log shipping enabled: {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            bearer_token: bearer_token.filter(|t| !t.is_empty()),
        })
    }
}

#[async_trait]
impl AuditSink for HttpAuditSink {
    async fn send(&self, entry: &LogEntry) -> AuditResult<()> {
        let mut request = self.client.post(&self.endpoint).json(entry);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuditError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuditError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

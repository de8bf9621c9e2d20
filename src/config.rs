//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. `.env` files are picked up by `dotenvy` in `main.rs`.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix of returned short links (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `AUDIT_LOG_URL` - Endpoint receiving audit lines (disabled when unset)
//! - `AUDIT_LOG_TOKEN` - Bearer token sent to the audit endpoint
//! - `AUDIT_TIMEOUT_SECONDS` - Audit request timeout (default: 10)
//! - `AUDIT_QUEUE_CAPACITY` - Audit lines buffered before new ones are dropped (default: 1024)
//! - `PURGE_AFTER_MINUTES` - Remove records this long after expiry (disabled when unset)
//! - `PURGE_INTERVAL_SECONDS` - How often the purge runs (default: 60)

use crate::infrastructure::audit::DEFAULT_AUDIT_QUEUE_CAPACITY;
use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub audit_log_url: Option<String>,
    /// Sent as `Authorization: Bearer <token>`. Never printed.
    pub audit_log_token: Option<String>,
    pub audit_timeout_seconds: u64,
    /// Pending audit lines kept while the endpoint is slow.
    pub audit_queue_capacity: usize,
    /// Grace period after expiry before a record is purged. `None` keeps
    /// every record for the lifetime of the process.
    pub purge_after_minutes: Option<i64>,
    pub purge_interval_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let audit_log_url = non_empty_var("AUDIT_LOG_URL");
        let audit_log_token = non_empty_var("AUDIT_LOG_TOKEN");

        let audit_timeout_seconds = parse_var("AUDIT_TIMEOUT_SECONDS")?.unwrap_or(10);
        let audit_queue_capacity =
            parse_var("AUDIT_QUEUE_CAPACITY")?.unwrap_or(DEFAULT_AUDIT_QUEUE_CAPACITY);
        let purge_after_minutes = parse_var("PURGE_AFTER_MINUTES")?;
        let purge_interval_seconds = parse_var("PURGE_INTERVAL_SECONDS")?.unwrap_or(60);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            audit_log_url,
            audit_log_token,
            audit_timeout_seconds,
            audit_queue_capacity,
            purge_after_minutes,
            purge_interval_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` or `audit_log_url` is not an HTTP(S) URL
    /// - `audit_timeout_seconds`, `audit_queue_capacity` or `purge_interval_seconds` is zero
    /// - `purge_after_minutes` is negative
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if let Some(ref audit_url) = self.audit_log_url
            && !is_http_url(audit_url)
        {
            anyhow::bail!(
                "AUDIT_LOG_URL must start with 'http://' or 'https://', got '{}'",
                audit_url
            );
        }

        if self.audit_timeout_seconds == 0 {
            anyhow::bail!("AUDIT_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.audit_queue_capacity == 0 {
            anyhow::bail!("AUDIT_QUEUE_CAPACITY must be greater than 0");
        }

        if let Some(minutes) = self.purge_after_minutes
            && minutes < 0
        {
            anyhow::bail!("PURGE_AFTER_MINUTES must not be negative, got {}", minutes);
        }

        if self.purge_interval_seconds == 0 {
            anyhow::bail!("PURGE_INTERVAL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether audit lines are shipped to an external endpoint.
    pub fn is_audit_enabled(&self) -> bool {
        self.audit_log_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);

        match (&self.audit_log_url, &self.audit_log_token) {
            (Some(url), Some(token)) => tracing::info!(
                "  Audit log: {} (token {}, queue {})",
                url,
                mask_secret(token),
                self.audit_queue_capacity
            ),
            (Some(url), None) => tracing::info!(
                "  Audit log: {} (queue {})",
                url,
                self.audit_queue_capacity
            ),
            (None, _) => tracing::info!("  Audit log: disabled"),
        }

        match self.purge_after_minutes {
            Some(minutes) => tracing::info!(
                "  Expired purge: {} min after expiry, every {}s",
                minutes,
                self.purge_interval_seconds
            ),
            None => tracing::info!("  Expired purge: disabled"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match non_empty_var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: '{}'", key, raw)),
        None => Ok(None),
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Masks a secret for logging, keeping only its first four characters.
fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", visible)
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

//! Short URL record owned by the registry.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::click::Click;

/// A shortened URL with its expiry window and click history.
///
/// Everything except the click history is fixed at construction. The only
/// mutation path is [`ShortUrl::push_click`], which keeps `click_count` and
/// `click_history` in lockstep.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    click_count: u64,
    click_history: Vec<Click>,
}

impl ShortUrl {
    /// Creates a record with an empty click history.
    pub fn new(
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            original_url,
            created_at,
            expires_at,
            click_count: 0,
            click_history: Vec::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    pub fn click_history(&self) -> &[Click] {
        &self.click_history
    }

    /// Returns true once `now` is strictly past the expiry time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Appends a click and bumps the counter.
    pub(crate) fn push_click(&mut self, click: Click) {
        self.click_history.push(click);
        self.click_count += 1;
    }

    /// Copies the analytics view of this record.
    pub fn stats(&self) -> ShortUrlStats {
        ShortUrlStats {
            total_clicks: self.click_count,
            created_at: self.created_at,
            expires_at: self.expires_at,
            clicks: self.click_history.clone(),
        }
    }
}

/// Point-in-time copy of a record's analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlStats {
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: Vec<Click>,
}

/// Result of a successful create: the assigned code and its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedShortUrl {
    pub code: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}

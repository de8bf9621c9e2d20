//! DTOs for short URL statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Click, ShortUrlStats};

/// Statistics for a single short code.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: Vec<ClickInfo>,
}

/// Individual click event information.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub location: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.timestamp,
            source: click.source,
            location: click.location,
        }
    }
}

impl From<ShortUrlStats> for StatsResponse {
    fn from(stats: ShortUrlStats) -> Self {
        Self {
            total_clicks: stats.total_clicks,
            created_at: stats.created_at,
            expires_at: stats.expires_at,
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

//! Background purge of long-expired records.
//!
//! Only spawned when `PURGE_AFTER_MINUTES` is configured. Without it the
//! registry keeps every record forever and expiry is enforced purely at
//! read time.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::domain::registry::Registry;

/// Periodically removes records that expired more than `grace` ago.
///
/// Runs until the task is aborted.
pub async fn run_expiry_sweeper(registry: Arc<Registry>, grace: Duration, every: StdDuration) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        grace_minutes = grace.num_minutes(),
        interval_secs = every.as_secs(),
        "Expiry sweeper started"
    );

    loop {
        ticker.tick().await;

        let removed = registry.purge_expired(grace);
        if removed > 0 {
            info!(removed, remaining = registry.len(), "Purged expired short URLs");
        } else {
            debug!("Expiry sweep found nothing to purge");
        }
    }
}

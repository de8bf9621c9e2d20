//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::registry::Registry;
use crate::infrastructure::audit::AuditLogger;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub audit: AuditLogger,
}

impl AppState {
    /// Wires the services around a single registry instance.
    pub fn new(registry: Arc<Registry>, audit: AuditLogger, base_url: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(
                registry.clone(),
                audit.clone(),
                base_url,
            )),
            stats_service: Arc::new(StatsService::new(registry, audit.clone())),
            audit,
        }
    }
}

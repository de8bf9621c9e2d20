//! # URL Shortener
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Registry, entities, clock and the expiry sweeper
//! - **Application Layer** ([`application`]) - Service orchestration over the registry
//! - **Infrastructure Layer** ([`infrastructure`]) - Best-effort audit log shipping
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Short codes that expire after a per-link validity (30 minutes by default)
//! - Caller-chosen or generated 8-character hex codes
//! - Per-click statistics with referrer source
//! - Optional purge of long-expired records
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://sho.rt"
//! cargo run -- --listen 127.0.0.1:3000
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, CreatedShortUrl, ShortUrlStats};
    pub use crate::domain::registry::Registry;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

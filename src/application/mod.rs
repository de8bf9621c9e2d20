//! Application layer services implementing business logic.
//!
//! Services wrap the shared [`crate::domain::registry::Registry`] with audit
//! logging and convert domain errors into [`crate::error::AppError`] for the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution
//! - [`services::stats_service::StatsService`] - Click statistics

pub mod services;

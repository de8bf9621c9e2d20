//! Domain layer: the short URL registry and its data model.
//!
//! # Architecture
//!
//! - [`entities`] - Records, click events and stats snapshots
//! - [`registry`] - Lock-guarded store with create/resolve/click/stats
//! - [`clock`] - Time source injected into the registry
//! - [`error`] - Validation and registry error kinds
//! - [`sweeper`] - Optional background purge of expired records
//!
//! The domain layer has no HTTP, network or environment dependencies. The
//! API layer calls into it through [`crate::application::services::LinkService`].

pub mod clock;
pub mod entities;
pub mod error;
pub mod registry;
pub mod sweeper;

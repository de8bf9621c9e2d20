//! Infrastructure layer for integrations outside the process.
//!
//! # Modules
//!
//! - [`audit`] - Audit log shipping with HTTP and no-op sinks

pub mod audit;

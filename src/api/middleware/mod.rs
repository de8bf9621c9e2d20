//! HTTP middleware for request processing.
//!
//! Provides request tracing and audit line emission.

pub mod audit;
pub mod tracing;

//! Utility functions for code generation and input validation.
//!
//! - [`code_generator`] - Random hex short code generation
//! - [`validation`] - URL and custom short code validation

pub mod code_generator;
pub mod validation;

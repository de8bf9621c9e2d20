//! Error kinds produced by validation and the short URL registry.
//!
//! All registry operations return these as values. None of them is fatal
//! to the process; the API layer maps them to HTTP responses via
//! [`crate::error::AppError`].

use thiserror::Error;

/// Rejection of a submitted long URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    Malformed(String),
}

/// Rejection of a user-supplied custom short code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortCodeValidationError {
    #[error("Shortcode must be 4-20 characters, got {0}")]
    BadLength(usize),

    #[error("Shortcode must be alphanumeric")]
    NonAlphanumeric,
}

/// Errors returned by [`crate::domain::registry::Registry`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error("Invalid shortcode: {0}")]
    InvalidShortCode(#[from] ShortCodeValidationError),

    #[error("Validity of {0} minutes is out of range")]
    ValidityOutOfRange(i64),

    #[error("Shortcode already exists: {0}")]
    CodeCollision(String),

    #[error("Shortcode not found: {0}")]
    NotFound(String),

    #[error("Shortcode expired: {0}")]
    Expired(String),

    #[error("Failed to generate a unique shortcode after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
}

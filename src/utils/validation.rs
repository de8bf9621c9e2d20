//! Validation of submitted URLs and custom short codes.
//!
//! Both functions are pure; the registry calls them before taking its lock.

use url::Url;

use crate::domain::error::{ShortCodeValidationError, UrlValidationError};

/// Inclusive bounds on custom short code length.
pub const MIN_CODE_LENGTH: usize = 4;
pub const MAX_CODE_LENGTH: usize = 20;

/// Validates a long URL and returns its protocol-prefixed form.
///
/// # Rules
///
/// 1. Surrounding whitespace is ignored; an empty result is rejected
/// 2. Input without an `http://` or `https://` prefix gets `https://` prepended
/// 3. The result must parse as a URL with a non-empty host
///
/// The returned string is the prefixed input, not the parser's
/// re-serialization, so `example.com` becomes `https://example.com` with no
/// trailing slash added.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for empty input and
/// [`UrlValidationError::Malformed`] when parsing fails or no host is present.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(validate_url("http://a.com/x").unwrap(), "http://a.com/x");
/// ```
pub fn validate_url(raw: &str) -> Result<String, UrlValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let normalized = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed =
        Url::parse(&normalized).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(normalized),
        _ => Err(UrlValidationError::Malformed("missing host".to_string())),
    }
}

fn has_http_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 4-20 characters, counted as Unicode scalar values rather
///   than bytes
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`ShortCodeValidationError::BadLength`] or
/// [`ShortCodeValidationError::NonAlphanumeric`].
pub fn validate_short_code(code: &str) -> Result<(), ShortCodeValidationError> {
    let length = code.chars().count();
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        return Err(ShortCodeValidationError::BadLength(length));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ShortCodeValidationError::NonAlphanumeric);
    }

    Ok(())
}

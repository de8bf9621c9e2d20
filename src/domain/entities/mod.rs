//! Core domain entities.
//!
//! - [`ShortUrl`] - A shortened URL record with its click history
//! - [`ShortUrlStats`] - Snapshot of a record's analytics
//! - [`Click`] - A single redirect event

pub mod click;
pub mod short_url;

pub use click::{Click, DIRECT_SOURCE, UNKNOWN_LOCATION};
pub use short_url::{CreatedShortUrl, ShortUrl, ShortUrlStats};

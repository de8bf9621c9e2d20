//! In-memory short URL registry.
//!
//! The registry is the single owner of every [`ShortUrl`] record. All state
//! lives in one `HashMap` behind one reader/writer lock:
//!
//! - `resolve`, `stats` and `len` take the shared lock
//! - `create`, `record_click` and `purge_expired` take the exclusive lock
//!
//! `create` checks for an existing code and inserts the new record inside
//! the same write-lock scope, for both custom and generated codes, so two
//! concurrent creates can never claim the same code.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{Click, CreatedShortUrl, ShortUrl, ShortUrlStats};
use crate::domain::error::RegistryError;
use crate::utils::code_generator::{CodeGenerator, RandomHexGenerator};
use crate::utils::validation::{validate_short_code, validate_url};

/// Validity applied when none (or a non-positive one) is requested.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Upper bound on generated-code collision retries.
pub const DEFAULT_MAX_GENERATION_ATTEMPTS: usize = 1000;

/// Concurrency-safe store of short URL records.
///
/// Construct one instance at startup and share it behind an `Arc`.
pub struct Registry {
    records: RwLock<HashMap<String, ShortUrl>>,
    clock: Arc<dyn Clock>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl Registry {
    /// Creates an empty registry using the system clock and random hex codes.
    pub fn new() -> Self {
        Self::with_parts(Arc::new(SystemClock), Arc::new(RandomHexGenerator))
    }

    /// Creates an empty registry with an injected clock and code generator.
    pub fn with_parts(clock: Arc<dyn Clock>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            clock,
            generator,
            max_attempts: DEFAULT_MAX_GENERATION_ATTEMPTS,
        }
    }

    /// Overrides the generated-code retry bound (minimum 1).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Creates a new short URL record.
    ///
    /// # Arguments
    ///
    /// - `original_url` - URL to shorten; stored in normalized form
    /// - `validity_minutes` - lifetime; `None` or `<= 0` means 30 minutes
    /// - `custom_code` - requested code; generated when `None`
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidUrl`] if the URL fails validation
    /// - [`RegistryError::InvalidShortCode`] if the custom code is malformed
    /// - [`RegistryError::ValidityOutOfRange`] if the expiry overflows
    /// - [`RegistryError::CodeCollision`] if the custom code is taken
    /// - [`RegistryError::GenerationExhausted`] if no free code was found
    pub fn create(
        &self,
        original_url: &str,
        validity_minutes: Option<i64>,
        custom_code: Option<&str>,
    ) -> Result<CreatedShortUrl, RegistryError> {
        let original_url = validate_url(original_url)?;

        if let Some(code) = custom_code {
            validate_short_code(code)?;
        }

        let validity = validity_minutes
            .filter(|minutes| *minutes > 0)
            .unwrap_or(DEFAULT_VALIDITY_MINUTES);

        let mut records = self.records.write();

        let created_at = self.clock.now();
        let expires_at = expiry_for(created_at, validity)?;

        let code = match custom_code {
            Some(code) => code.to_string(),
            None => self.next_free_code(&records)?,
        };

        match records.entry(code) {
            Entry::Occupied(entry) => Err(RegistryError::CodeCollision(entry.key().clone())),
            Entry::Vacant(entry) => {
                let code = entry.key().clone();
                entry.insert(ShortUrl::new(
                    code.clone(),
                    original_url.clone(),
                    created_at,
                    expires_at,
                ));

                Ok(CreatedShortUrl {
                    code,
                    original_url,
                    expires_at,
                })
            }
        }
    }

    /// Returns the original URL for a live code.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] if the code is unknown
    /// - [`RegistryError::Expired`] if the current time is past the expiry;
    ///   the record itself stays in place
    pub fn resolve(&self, code: &str) -> Result<String, RegistryError> {
        let records = self.records.read();
        let record = records
            .get(code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))?;

        if record.is_expired_at(self.clock.now()) {
            return Err(RegistryError::Expired(code.to_string()));
        }

        Ok(record.original_url().to_string())
    }

    /// Appends a click to a code's history.
    ///
    /// Expiry is not checked here; callers gate on [`Registry::resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is unknown.
    pub fn record_click(
        &self,
        code: &str,
        source: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let mut records = self.records.write();
        let record = records
            .get_mut(code)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))?;

        record.push_click(Click::new(self.clock.now(), source.into(), location.into()));
        Ok(())
    }

    /// Returns a snapshot of a code's analytics, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code is unknown.
    pub fn stats(&self, code: &str) -> Result<ShortUrlStats, RegistryError> {
        self.records
            .read()
            .get(code)
            .map(ShortUrl::stats)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))
    }

    /// Removes records that expired more than `grace` ago.
    ///
    /// Returns the number of removed records.
    pub fn purge_expired(&self, grace: Duration) -> usize {
        let now = self.clock.now();
        let mut records = self.records.write();
        let before = records.len();

        records.retain(|_, record| match record.expires_at().checked_add_signed(grace) {
            Some(cutoff) => now <= cutoff,
            None => true,
        });

        before - records.len()
    }

    /// Number of stored records, including expired ones.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Draws generated codes until one is free in `records`.
    ///
    /// Must be called with the write lock held so the returned code is still
    /// free at insert time.
    fn next_free_code(&self, records: &HashMap<String, ShortUrl>) -> Result<String, RegistryError> {
        for _ in 0..self.max_attempts {
            let candidate = self.generator.generate();
            if !records.contains_key(&candidate) {
                return Ok(candidate);
            }
        }

        Err(RegistryError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn expiry_for(created_at: DateTime<Utc>, validity: i64) -> Result<DateTime<Utc>, RegistryError> {
    Duration::try_minutes(validity)
        .and_then(|d| created_at.checked_add_signed(d))
        .ok_or(RegistryError::ValidityOutOfRange(validity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::error::{ShortCodeValidationError, UrlValidationError};
    use crate::utils::code_generator::MockCodeGenerator;
    use std::sync::Barrier;
    use std::thread;

    fn test_registry() -> (Registry, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let registry = Registry::with_parts(clock.clone(), Arc::new(RandomHexGenerator));
        (registry, clock)
    }

    fn fixed_generator(codes: &'static [&'static str]) -> MockCodeGenerator {
        let mut generator = MockCodeGenerator::new();
        let mut next = 0;
        generator.expect_generate().returning(move || {
            let code = codes[next % codes.len()];
            next += 1;
            code.to_string()
        });
        generator
    }

    #[test]
    fn test_create_generates_hex_code() {
        let (registry, clock) = test_registry();

        let created = registry.create("https://a.com", Some(60), None).unwrap();

        assert_eq!(created.code.len(), 8);
        assert!(created.code.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(created.original_url, "https://a.com");
        assert_eq!(created.expires_at, clock.now() + Duration::minutes(60));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_then_resolve_then_expire() {
        let (registry, clock) = test_registry();

        let created = registry.create("https://a.com", Some(60), None).unwrap();
        assert_eq!(registry.resolve(&created.code).unwrap(), "https://a.com");

        clock.advance(Duration::minutes(61));

        assert_eq!(
            registry.resolve(&created.code),
            Err(RegistryError::Expired(created.code.clone()))
        );
        // the record is kept after expiry
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_exactly_at_expiry_is_still_live() {
        let (registry, clock) = test_registry();
        let created = registry.create("a.com", Some(1), None).unwrap();

        clock.set(created.expires_at);
        assert!(registry.resolve(&created.code).is_ok());

        clock.advance(Duration::milliseconds(1));
        assert!(matches!(
            registry.resolve(&created.code),
            Err(RegistryError::Expired(_))
        ));
    }

    #[test]
    fn test_create_normalizes_url() {
        let (registry, _) = test_registry();

        let created = registry.create("example.com", Some(60), None).unwrap();

        assert_eq!(created.original_url, "https://example.com");
        assert_eq!(
            registry.resolve(&created.code).unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_default_validity_applies_when_missing_or_non_positive() {
        let (registry, clock) = test_registry();
        let expected = clock.now() + Duration::minutes(DEFAULT_VALIDITY_MINUTES);

        for validity in [None, Some(0), Some(-5)] {
            let created = registry.create("a.com", validity, None).unwrap();
            assert_eq!(created.expires_at, expected);

            let stats = registry.stats(&created.code).unwrap();
            assert!(stats.expires_at > stats.created_at);
        }
    }

    #[test]
    fn test_create_rejects_overflowing_validity() {
        let (registry, _) = test_registry();

        let result = registry.create("a.com", Some(i64::MAX), None);

        assert_eq!(result, Err(RegistryError::ValidityOutOfRange(i64::MAX)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_with_custom_code() {
        let (registry, _) = test_registry();

        let created = registry.create("b.com", None, Some("MyLink42")).unwrap();

        assert_eq!(created.code, "MyLink42");
        assert_eq!(registry.resolve("MyLink42").unwrap(), "https://b.com");
    }

    #[test]
    fn test_create_custom_code_too_short() {
        let (registry, _) = test_registry();

        let result = registry.create("b.com", None, Some("abc"));

        assert_eq!(
            result,
            Err(RegistryError::InvalidShortCode(
                ShortCodeValidationError::BadLength(3)
            ))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_custom_code_non_alphanumeric() {
        let (registry, _) = test_registry();

        let result = registry.create("b.com", None, Some("abc#123"));

        assert_eq!(
            result,
            Err(RegistryError::InvalidShortCode(
                ShortCodeValidationError::NonAlphanumeric
            ))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_create_rejects_empty_url() {
        let (registry, _) = test_registry();

        assert_eq!(
            registry.create("", None, None),
            Err(RegistryError::InvalidUrl(UrlValidationError::Empty))
        );
    }

    #[test]
    fn test_create_rejects_malformed_url() {
        let (registry, _) = test_registry();

        assert!(matches!(
            registry.create("http://", None, None),
            Err(RegistryError::InvalidUrl(UrlValidationError::Malformed(_)))
        ));
    }

    #[test]
    fn test_custom_code_collision_leaves_existing_record_untouched() {
        let (registry, clock) = test_registry();

        registry.create("first.com", Some(10), Some("taken1")).unwrap();
        registry.record_click("taken1", "direct", "unknown").unwrap();
        let before = registry.stats("taken1").unwrap();

        clock.advance(Duration::minutes(1));
        let result = registry.create("second.com", Some(99), Some("taken1"));

        assert_eq!(
            result,
            Err(RegistryError::CodeCollision("taken1".to_string()))
        );
        assert_eq!(registry.resolve("taken1").unwrap(), "https://first.com");
        assert_eq!(registry.stats("taken1").unwrap(), before);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_generated_code_retries_past_collisions() {
        let clock = Arc::new(ManualClock::default());
        let registry = Registry::with_parts(
            clock,
            Arc::new(fixed_generator(&["aaaaaaaa", "aaaaaaaa", "bbbbbbbb"])),
        );

        let first = registry.create("a.com", None, None).unwrap();
        let second = registry.create("b.com", None, None).unwrap();

        assert_eq!(first.code, "aaaaaaaa");
        assert_eq!(second.code, "bbbbbbbb");
    }

    #[test]
    fn test_generation_exhausted_after_bounded_attempts() {
        let clock = Arc::new(ManualClock::default());
        let registry = Registry::with_parts(clock, Arc::new(fixed_generator(&["deadbeef"])))
            .with_max_attempts(5);

        registry.create("a.com", None, None).unwrap();
        let result = registry.create("b.com", None, None);

        assert_eq!(
            result,
            Err(RegistryError::GenerationExhausted { attempts: 5 })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_code() {
        let (registry, _) = test_registry();

        assert_eq!(
            registry.resolve("missing1"),
            Err(RegistryError::NotFound("missing1".to_string()))
        );
    }

    #[test]
    fn test_stats_right_after_create_has_zero_clicks() {
        let (registry, clock) = test_registry();
        let created = registry.create("a.com", Some(5), None).unwrap();

        let stats = registry.stats(&created.code).unwrap();

        assert_eq!(stats.total_clicks, 0);
        assert!(stats.clicks.is_empty());
        assert_eq!(stats.created_at, clock.now());
        assert_eq!(stats.expires_at, created.expires_at);
    }

    #[test]
    fn test_record_click_appends_in_call_order() {
        let (registry, clock) = test_registry();
        let created = registry.create("a.com", Some(5), None).unwrap();

        for i in 0..5 {
            clock.advance(Duration::seconds(1));
            registry
                .record_click(&created.code, format!("https://ref{i}.com"), "unknown")
                .unwrap();
        }

        let stats = registry.stats(&created.code).unwrap();
        assert_eq!(stats.total_clicks, 5);
        assert_eq!(stats.clicks.len(), 5);
        for (i, click) in stats.clicks.iter().enumerate() {
            assert_eq!(click.source, format!("https://ref{i}.com"));
        }
        assert!(stats.clicks.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_record_click_on_expired_code_is_accepted() {
        let (registry, clock) = test_registry();
        let created = registry.create("a.com", Some(1), None).unwrap();

        clock.advance(Duration::minutes(2));

        assert!(registry.resolve(&created.code).is_err());
        assert!(registry.record_click(&created.code, "direct", "unknown").is_ok());
        assert_eq!(registry.stats(&created.code).unwrap().total_clicks, 1);
    }

    #[test]
    fn test_record_click_unknown_code() {
        let (registry, _) = test_registry();

        assert_eq!(
            registry.record_click("nothere", "direct", "unknown"),
            Err(RegistryError::NotFound("nothere".to_string()))
        );
    }

    #[test]
    fn test_stats_unknown_code() {
        let (registry, _) = test_registry();

        assert_eq!(
            registry.stats("nonexistent"),
            Err(RegistryError::NotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_stats_visible_after_expiry() {
        let (registry, clock) = test_registry();
        let created = registry.create("a.com", Some(1), None).unwrap();

        clock.advance(Duration::hours(1));

        assert!(registry.stats(&created.code).is_ok());
    }

    #[test]
    fn test_purge_expired_respects_grace() {
        let (registry, clock) = test_registry();
        let short = registry.create("a.com", Some(1), Some("short1")).unwrap();
        registry.create("b.com", Some(120), Some("long1")).unwrap();

        clock.advance(Duration::minutes(5));
        assert_eq!(registry.purge_expired(Duration::minutes(10)), 0);
        assert_eq!(registry.len(), 2);

        clock.advance(Duration::minutes(10));
        assert_eq!(registry.purge_expired(Duration::minutes(10)), 1);
        assert_eq!(
            registry.stats(&short.code),
            Err(RegistryError::NotFound(short.code.clone()))
        );
        assert!(registry.resolve("long1").is_ok());
    }

    #[test]
    fn test_concurrent_creates_with_same_custom_code() {
        let registry = Arc::new(Registry::new());
        let barrier = Arc::new(Barrier::new(8));

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let registry = registry.clone();
                    let barrier = barrier.clone();
                    scope.spawn(move || {
                        barrier.wait();
                        registry.create(&format!("site{i}.com"), None, Some("samecode"))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let successes = results.iter().filter(|r| r.is_ok()).count();
        let collisions = results
            .iter()
            .filter(|r| matches!(r, Err(RegistryError::CodeCollision(_))))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(collisions, 7);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_clicks_are_not_lost() {
        let registry = Arc::new(Registry::new());
        let created = registry.create("a.com", None, None).unwrap();

        thread::scope(|scope| {
            for _ in 0..4 {
                let registry = registry.clone();
                let code = created.code.clone();
                scope.spawn(move || {
                    for _ in 0..250 {
                        registry.record_click(&code, "direct", "unknown").unwrap();
                    }
                });
            }
        });

        let stats = registry.stats(&created.code).unwrap();
        assert_eq!(stats.total_clicks, 1000);
        assert_eq!(stats.clicks.len(), 1000);
    }

    #[test]
    fn test_concurrent_generated_codes_are_unique() {
        let registry = Arc::new(Registry::new());

        let codes: Vec<String> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let registry = registry.clone();
                    scope.spawn(move || {
                        (0..100)
                            .map(|_| registry.create("a.com", None, None).unwrap().code)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), 400);
        assert_eq!(registry.len(), 400);
    }
}

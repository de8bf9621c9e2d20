#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use shorturl_service::domain::clock::ManualClock;
use shorturl_service::domain::registry::Registry;
use shorturl_service::infrastructure::audit::{
    AuditLogger, AuditResult, AuditSink, DEFAULT_AUDIT_QUEUE_CAPACITY, LogEntry,
};
use shorturl_service::routes::{app_router, base_router};
use shorturl_service::state::AppState;
use shorturl_service::utils::code_generator::RandomHexGenerator;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "http://sho.rt";

/// Audit sink that keeps every entry in memory.
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingSink {
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Polls until an entry matching `pred` arrives or one second passes.
    pub async fn wait_for(&self, pred: impl Fn(&LogEntry) -> bool) -> bool {
        for _ in 0..100 {
            if self.entries.lock().iter().any(&pred) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }
}

#[async_trait]
impl AuditSink for RecordingSink {
    async fn send(&self, entry: &LogEntry) -> AuditResult<()> {
        self.entries.lock().push(entry.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub clock: Arc<ManualClock>,
    pub registry: Arc<Registry>,
    pub audit: Arc<RecordingSink>,
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// Test app over the bare router.
pub fn create_test_app() -> TestApp {
    build_test_app(|state| TestServer::new(base_router(state)).unwrap())
}

/// Test app over the production router, including path normalization.
pub fn create_normalized_test_app() -> TestApp {
    build_test_app(|state| {
        TestServer::new(ServiceExt::<Request>::into_make_service(app_router(state))).unwrap()
    })
}

fn build_test_app(make_server: impl FnOnce(AppState) -> TestServer) -> TestApp {
    let clock = Arc::new(ManualClock::new(start_time()));
    let registry = Arc::new(Registry::with_parts(
        clock.clone(),
        Arc::new(RandomHexGenerator),
    ));
    let audit = Arc::new(RecordingSink::default());

    let state = AppState::new(
        registry.clone(),
        AuditLogger::spawn(audit.clone(), DEFAULT_AUDIT_QUEUE_CAPACITY),
        BASE_URL,
    );

    TestApp {
        server: make_server(state),
        clock,
        registry,
        audit,
    }
}

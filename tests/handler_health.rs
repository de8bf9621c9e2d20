mod common;

use shorturl_service::infrastructure::audit::{AuditLevel, AuditPackage};

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = common::create_test_app();

    let response = app.server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["message"], "URL Shortener service is running");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(
        json["time"]
            .as_str()
            .unwrap()
            .parse::<chrono::DateTime<chrono::Utc>>()
            .is_ok()
    );
}

#[tokio::test]
async fn test_requests_emit_route_audit_lines() {
    let app = common::create_test_app();

    app.server.get("/health").await.assert_status_ok();

    assert!(
        app.audit
            .wait_for(|e| e.package == AuditPackage::Route
                && e.level == AuditLevel::Info
                && e.message == "GET /health")
            .await
    );
}

#[tokio::test]
async fn test_failed_redirect_is_audited() {
    let app = common::create_test_app();

    app.server.get("/missing1").await.assert_status_not_found();

    assert!(
        app.audit
            .wait_for(|e| e.package == AuditPackage::Handler
                && e.level == AuditLevel::Error
                && e.message.starts_with("Redirect failed for missing1"))
            .await
    );
}

mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use tinylink::api::handlers::{health_handler, link_info_handler};
use tinylink::domain::entities::NewShortRecord;
use tinylink::domain::repositories::ShortRecordRepository;

#[tokio::test]
async fn test_link_info_reports_record_without_counting() {
    let ctx = common::create_test_state().await;
    ctx.records
        .insert(NewShortRecord {
            code: "0001".to_string(),
            original_url: "https://example.com".to_string(),
            expires_at: None,
        })
        .await
        .unwrap();
    ctx.records.increment_hits("0001").await.unwrap();

    let app = Router::new()
        .route("/api/links/{code}", get(link_info_handler))
        .with_state(ctx.state.clone());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/links/0001").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "0001");
    assert_eq!(body["original_url"], "https://example.com");
    assert_eq!(body["hit_count"], 1);
    assert_eq!(body["expired"], false);

    // The lookup itself must not have counted a hit.
    let record = ctx.records.find_by_code("0001").await.unwrap().unwrap();
    assert_eq!(record.hit_count, 1);
}

#[tokio::test]
async fn test_link_info_marks_expired_records() {
    let ctx = common::create_test_state().await;
    ctx.records
        .insert(NewShortRecord {
            code: "0001".to_string(),
            original_url: "https://example.com".to_string(),
            expires_at: Some(Utc::now() - Duration::hours(1)),
        })
        .await
        .unwrap();

    let app = Router::new()
        .route("/api/links/{code}", get(link_info_handler))
        .with_state(ctx.state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/links/0001").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["expired"], true);
}

#[tokio::test]
async fn test_link_info_unknown_code_is_not_found() {
    let ctx = common::create_test_state().await;

    let app = Router::new()
        .route("/api/links/{code}", get(link_info_handler))
        .with_state(ctx.state);
    let server = TestServer::new(app).unwrap();

    server.get("/api/links/zzzz").await.assert_status_not_found();
}

#[tokio::test]
async fn test_health_reports_healthy_storage() {
    let ctx = common::create_test_state().await;

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(ctx.state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
}

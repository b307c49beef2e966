mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use tinylink::api::handlers::redirect_handler;
use tinylink::domain::entities::NewShortRecord;
use tinylink::domain::repositories::ShortRecordRepository;

fn redirect_app(state: tinylink::AppState) -> TestServer {
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

async fn seed(
    ctx: &common::TestContext,
    code: &str,
    url: &str,
    expires_at: Option<chrono::DateTime<Utc>>,
) {
    ctx.records
        .insert(NewShortRecord {
            code: code.to_string(),
            original_url: url.to_string(),
            expires_at,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_redirect_to_original_url() {
    let ctx = common::create_test_state().await;
    seed(&ctx, "0001", "https://example.com/landing", None).await;
    let server = redirect_app(ctx.state.clone());

    let response = server.get("/0001").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/landing"
    );
}

#[tokio::test]
async fn test_redirect_unknown_code_is_not_found() {
    let ctx = common::create_test_state().await;
    let server = redirect_app(ctx.state);

    let response = server.get("/zzzz").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    // A missing code is never reported as expired.
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_expired_code_conflicts() {
    let ctx = common::create_test_state().await;
    seed(
        &ctx,
        "0001",
        "https://example.com",
        Some(Utc::now() - Duration::seconds(1)),
    )
    .await;
    let server = redirect_app(ctx.state.clone());

    let response = server.get("/0001").await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "expired"
    );

    // The record is kept and its hit count untouched.
    let record = ctx.records.find_by_code("0001").await.unwrap().unwrap();
    assert_eq!(record.hit_count, 0);
}

#[tokio::test]
async fn test_redirect_future_expiry_resolves() {
    let ctx = common::create_test_state().await;
    seed(
        &ctx,
        "0001",
        "https://example.com",
        Some(Utc::now() + Duration::hours(1)),
    )
    .await;
    let server = redirect_app(ctx.state);

    let response = server.get("/0001").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_redirect_increments_hit_count_eventually() {
    let ctx = common::create_test_state().await;
    seed(&ctx, "0001", "https://example.com", None).await;
    let server = redirect_app(ctx.state.clone());

    server
        .get("/0001")
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    // The increment is fire-and-forget; poll instead of assuming immediacy.
    let mut hits = 0;
    for _ in 0..100 {
        hits = ctx
            .records
            .find_by_code("0001")
            .await
            .unwrap()
            .unwrap()
            .hit_count;
        if hits == 1 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    assert_eq!(hits, 1);
}

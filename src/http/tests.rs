//! HTTP API integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::{create_cors_layer, create_router, AppState};
use crate::identifier::UuidIdentifiers;

/// Helper to create test app.
fn create_test_app() -> Router {
    create_router(AppState::new(Arc::new(UuidIdentifiers)))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Join via the API and return the issued identifier.
async fn join(app: &Router, label: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::post("/queue/join")
                .header("content-type", "application/json")
                .body(Body::from(format!(r#"{{"display_label": "{label}"}}"#)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["identifier"].as_str().unwrap().to_string()
}

#[test]
fn test_create_cors_layer_default() {
    std::env::remove_var("CORS_ALLOW_ORIGIN");
    let _ = create_cors_layer();
}

#[test]
fn test_create_cors_layer_with_origins() {
    std::env::set_var(
        "CORS_ALLOW_ORIGIN",
        "http://localhost:3000,http://example.com",
    );
    let _ = create_cors_layer();
    std::env::remove_var("CORS_ALLOW_ORIGIN");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_join_issues_identifier() {
    let app = create_test_app();
    let identifier = join(&app, "alice").await;
    assert!(uuid::Uuid::parse_str(&identifier).is_ok());
}

#[tokio::test]
async fn test_poll_reports_position() {
    let app = create_test_app();

    let first = join(&app, "alice").await;
    let second = join(&app, "bob").await;

    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/queue/poll?identifier={second}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["admitted"], false);
    assert_eq!(json["data"]["position"], 1);

    let response = app
        .oneshot(
            Request::get(format!("/queue/poll?identifier={first}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 0);
}

#[tokio::test]
async fn test_poll_malformed_identifier_is_bad_request() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::get("/queue/poll?identifier=not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_poll_unknown_identifier_is_not_found() {
    let app = create_test_app();
    let unknown = uuid::Uuid::new_v4();
    let response = app
        .oneshot(
            Request::get(format!("/queue/poll?identifier={unknown}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admit_on_empty_queue_is_not_found() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::post("/queue/admit").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admit_then_poll_reports_admitted() {
    let app = create_test_app();

    let head = join(&app, "alice").await;
    join(&app, "bob").await;

    let response = app
        .clone()
        .oneshot(Request::post("/queue/admit").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["identifier"], head.as_str());

    let response = app
        .oneshot(
            Request::get(format!("/queue/poll?identifier={head}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["admitted"], true);
    assert!(json["data"].get("position").is_none());
}

#[tokio::test]
async fn test_admit_twice_is_a_conflict() {
    let app = create_test_app();
    join(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(Request::post("/queue/admit").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::post("/queue/admit").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_leave_flow() {
    let app = create_test_app();
    let identifier = join(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(
            Request::put(format!("/queue/leave?identifier={identifier}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A second leave finds nothing.
    let response = app
        .oneshot(
            Request::put(format!("/queue/leave?identifier={identifier}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admitted_head_leaves_and_next_moves_up() {
    let app = create_test_app();

    let head = join(&app, "alice").await;
    let next = join(&app, "bob").await;

    app.clone()
        .oneshot(Request::post("/queue/admit").body(Body::empty()).unwrap())
        .await
        .unwrap();
    app.clone()
        .oneshot(
            Request::put(format!("/queue/leave?identifier={head}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::get(format!("/queue/poll?identifier={next}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], 0);
}

#[tokio::test]
async fn test_first_returns_head_snapshot() {
    let app = create_test_app();
    let head = join(&app, "alice").await;

    let response = app
        .oneshot(Request::get("/queue/first").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["identifier"], head.as_str());
    assert_eq!(json["data"]["display_label"], "alice");
    assert_eq!(json["data"]["admittable"], false);
}

#[tokio::test]
async fn test_first_on_empty_queue_is_not_found() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::get("/queue/first").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stats_and_clear() {
    let app = create_test_app();
    join(&app, "alice").await;
    join(&app, "bob").await;

    let response = app
        .clone()
        .oneshot(Request::get("/queue/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["waiting"], 2);
    assert_eq!(json["data"]["shards"], 1);

    let response = app
        .clone()
        .oneshot(Request::post("/server/clear").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/queue/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["data"]["waiting"], 0);
}

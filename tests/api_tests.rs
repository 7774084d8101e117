//! API integration tests driving the router in-process

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use circulation_server::{
    api::create_router,
    config::AppConfig,
    repository::{seed::SeedDocument, Repository},
    services::Services,
    AppState,
};

const SEED: &str = r#"{
    "checkables": [
        {"code": "1-0", "title": "The White Whale", "variant": "media", "creator": "Melvin H", "media_type": "book"},
        {"code": "2-0", "title": "Anatomy Model", "variant": "science_kit"}
    ],
    "libraries": [
        {
            "name": "Central",
            "stock": [{"code": "1-0", "amount": 3}],
            "library_cards": [
                {
                    "patron_name": "Ana T",
                    "checkouts": [
                        {"code": "1-0", "checkout_date": "2022-12-18T00:00:00Z", "due_date": "2023-01-01T00:00:00Z"}
                    ]
                }
            ]
        },
        {"name": "East", "stock": [{"code": "1-0", "amount": 0}]}
    ]
}"#;

fn app() -> Router {
    let services = Services::new(Repository::in_memory());
    services
        .apply_seed(SeedDocument::from_json(SEED).unwrap())
        .unwrap();
    create_router(AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(services),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(&app(), get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_availability_omits_empty_branches() {
    let (status, body) = send(&app(), get("/api/v1/checkables/1-0/availability")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"available": 3, "library_name": "Central"}]));
}

#[tokio::test]
async fn test_availability_unknown_code_is_empty() {
    let (status, body) = send(&app(), get("/api/v1/checkables/9-9/availability")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_checkable_amount() {
    let app = app();

    let (status, body) = send(&app, get("/api/v1/libraries/Central/checkables/1-0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 3);

    let (status, body) = send(&app, get("/api/v1/libraries/Central/checkables/2-0")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 0);
    assert_eq!(body["checkable"]["title"], "Anatomy Model");

    let (status, body) = send(&app, get("/api/v1/libraries/Central/checkables/9-9")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchCheckable");

    let (status, body) = send(&app, get("/api/v1/libraries/West/checkables/1-0")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchLibrary");
}

#[tokio::test]
async fn test_duplicate_checkable_conflicts() {
    let app = app();
    let (status, _) = send(
        &app,
        post(
            "/api/v1/checkables",
            json!({"code": "1-0", "title": "Duplicate Title", "variant": "ticket"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = send(&app, get("/api/v1/checkables")).await;
    let matching = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["code"] == "1-0")
        .count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn test_create_checkable_then_lookup_by_variant() {
    let app = app();
    let (status, _) = send(&app, get("/api/v1/checkable-variants/ticket")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        post(
            "/api/v1/checkables",
            json!({"code": "3-0", "title": "Science Museum Tickets", "variant": "ticket"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], "3-0");

    let (status, body) = send(&app, get("/api/v1/checkable-variants/ticket")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Science Museum Tickets");

    let (status, _) = send(&app, get("/api/v1/checkable-variants/spaceship")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_library_conflicts() {
    let app = app();
    let (status, _) = send(&app, post("/api/v1/libraries", json!({"name": "Central"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, post("/api/v1/libraries", json!({"name": "North"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "North");

    let (_, body) = send(&app, get("/api/v1/libraries")).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_overdue_uses_reference_time() {
    let app = app();

    let (status, body) = send(&app, get("/api/v1/libraries/Central/overdue?at=2023-06-01T00:00:00Z")).await;
    assert_eq!(status, StatusCode::OK);
    let overdue = body.as_array().unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0]["patron"]["name"], "Ana T");

    let (_, body) = send(&app, get("/api/v1/libraries/Central/overdue?at=2022-01-01T00:00:00Z")).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&app, get("/api/v1/libraries/Central/overdue?at=2023-01-01T00:00:00Z")).await;
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, get("/api/v1/libraries/East/overdue")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get("/api/v1/libraries/West/overdue")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_overdue_rejects_malformed_reference_time() {
    let (status, body) = send(&app(), get("/api/v1/libraries/Central/overdue?at=yesterday")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

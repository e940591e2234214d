//! Integration tests for session HTTP endpoints.
//!
//! These tests drive the full router (CORS, tracing, timeout layers
//! included) against an in-memory SQLite store.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use layout_sessions::adapters::http::{api_router, SessionAppState};
use layout_sessions::adapters::sqlite::{apply_schema, connect_pool, SqliteSessionRepository};
use layout_sessions::config::{DatabaseConfig, ServerConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn test_app() -> Router {
    let pool = connect_pool(&DatabaseConfig::in_memory()).await.unwrap();
    apply_schema(&pool).await.unwrap();
    let state = SessionAppState::new(Arc::new(SqliteSessionRepository::new(pool)));
    api_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Like `send`, but with a literal body and the response kept as text.
async fn send_text(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn create(app: &Router, name: &str, config: Value) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/sessions",
        Some(json!({"name": name, "config": config})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn create_and_list_sessions() {
    let app = test_app().await;

    let created = create(
        &app,
        "Test Site",
        json!({"selections": [{"deviceId": "megapack", "quantity": 2}]}),
    )
    .await;

    assert_eq!(created["name"], "Test Site");
    assert!(created["id"].is_i64());
    assert!(created["createdAt"].as_str().is_some_and(|s| !s.is_empty()));

    let (status, list) = send(&app, Method::GET, "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0], created);
}

#[tokio::test]
async fn get_session_returns_created_session() {
    let app = test_app().await;
    let created = create(&app, "Get Test", json!({"selections": []})).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/sessions/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Get Test");
    assert_eq!(body["config"], json!({"selections": []}));
}

#[tokio::test]
async fn get_session_not_found_on_empty_store() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/sessions/9999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Session not found"}));
}

#[tokio::test]
async fn delete_session_then_get_is_not_found() {
    let app = test_app().await;
    let created = create(&app, "Delete Me", json!({"selections": []})).await;
    let uri = format!("/api/sessions/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Session not found"}));
}

#[tokio::test]
async fn delete_unknown_or_already_deleted_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/sessions/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Session not found"}));

    let created = create(&app, "Twice", json!({})).await;
    let uri = format!("/api/sessions/{}", created["id"]);
    send(&app, Method::DELETE, &uri, None).await;

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = test_app().await;
    let a = create(&app, "A", json!({})).await;
    let b = create(&app, "B", json!({})).await;
    let c = create(&app, "C", json!({})).await;

    let (_, list) = send(&app, Method::GET, "/api/sessions", None).await;

    let ids: Vec<&Value> = list.as_array().unwrap().iter().map(|s| &s["id"]).collect();
    assert_eq!(ids, vec![&c["id"], &b["id"], &a["id"]]);
}

#[tokio::test]
async fn deleted_session_disappears_from_list() {
    let app = test_app().await;
    let keep = create(&app, "Keep", json!({})).await;
    let gone = create(&app, "Gone", json!({})).await;

    send(&app, Method::DELETE, &format!("/api/sessions/{}", gone["id"]), None).await;

    let (_, list) = send(&app, Method::GET, "/api/sessions", None).await;
    assert_eq!(list, json!([keep]));
}

#[tokio::test]
async fn config_round_trips_for_any_json_shape() {
    let app = test_app().await;
    let configs = [
        json!({"selections": [{"deviceId": "megapack", "quantity": 2}], "meta": {"v": 1}}),
        json!([1, "two", null, true, {"nested": []}]),
        json!("just a string"),
        json!(12),
        json!(null),
    ];

    for config in configs {
        let created = create(&app, "Shape", config.clone()).await;
        assert_eq!(created["config"], config);

        let (_, fetched) = send(
            &app,
            Method::GET,
            &format!("/api/sessions/{}", created["id"]),
            None,
        )
        .await;
        assert_eq!(fetched["config"], config);
    }
}

#[tokio::test]
async fn config_number_text_is_returned_byte_for_byte() {
    let app = test_app().await;
    let config = r#"{"big":12345678901234567890123,"past_u64":18446744073709551616,"tiny":1.0715660391465826e-75,"neg_zero":-0.0,"trailing":2.50}"#;
    let expected = format!(r#","config":{},"createdAt":"#, config);

    let (status, created) = send_text(
        &app,
        Method::POST,
        "/api/sessions",
        Some(format!(r#"{{"name":"Numbers","config":{}}}"#, config)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(created.contains(&expected), "create body: {}", created);

    let id = serde_json::from_str::<Value>(&created).unwrap()["id"].clone();
    let (status, fetched) = send_text(&app, Method::GET, &format!("/api/sessions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched.contains(&expected), "get body: {}", fetched);

    let (_, listed) = send_text(&app, Method::GET, "/api/sessions", None).await;
    assert!(listed.contains(&expected), "list body: {}", listed);
}

#[tokio::test]
async fn duplicate_names_are_allowed() {
    let app = test_app().await;
    let first = create(&app, "Same", json!({})).await;
    let second = create(&app, "Same", json!({})).await;

    assert_ne!(first["id"], second["id"]);
}

// =============================================================================
// Malformed requests
// =============================================================================

#[tokio::test]
async fn missing_name_is_client_error() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sessions",
        Some(json!({"config": {}})),
    )
    .await;

    assert!(status.is_client_error());
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn missing_config_is_client_error() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::POST, "/api/sessions", Some(json!({"name": "x"}))).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn wrong_name_type_is_client_error() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/sessions",
        Some(json!({"name": 3, "config": {}})),
    )
    .await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn blank_name_is_unprocessable() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sessions",
        Some(json!({"name": "   ", "config": {}})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Field 'name' cannot be empty");

    let (_, list) = send(&app, Method::GET, "/api/sessions", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn invalid_json_body_is_client_error() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/sessions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_integer_id_is_client_error() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/sessions/abc", None).await;

    assert!(status.is_client_error());
    assert!(body["detail"].is_string());
}

// =============================================================================
// CORS
// =============================================================================

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/sessions")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn simple_request_carries_cors_header() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sessions")
                .header(header::ORIGIN, "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

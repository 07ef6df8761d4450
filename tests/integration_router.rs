mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{send, setup_offline_app};
use serde_json::json;
use tillpoint::config::CorsConfig;
use tower::ServiceExt;

#[tokio::test]
async fn test_root_works_without_database() {
    let (app, sessions) = setup_offline_app();

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Welcome to the Tillpoint POS API" }));
    assert_eq!(sessions.stats().acquired, 0);
}

#[tokio::test]
async fn test_health_returns_503_when_database_is_down() {
    let (app, _) = setup_offline_app();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "database is unavailable");
}

#[tokio::test]
async fn test_data_routes_return_503_when_database_is_down() {
    let (app, sessions) = setup_offline_app();

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        Some(json!({ "name": "Alice", "email": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let stats = sessions.stats();
    assert_eq!(stats.acquired, 0);
    assert_eq!(stats.released, 0);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _) = setup_offline_app();

    let (status, _) = send(&app, "GET", "/inventory", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (app, _) = setup_offline_app();

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/transactions/{id}"].is_object());
}

async fn preflight(origin: &str) -> axum::http::Response<Body> {
    let (app, _) = setup_offline_app();
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/products")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_cors_allows_configured_origin_with_credentials() {
    let origin = CorsConfig::default().allowed_origins[0].clone();
    let response = preflight(&origin).await;

    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN].to_str().unwrap(),
        origin
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS]
            .to_str()
            .unwrap(),
        "true"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap(),
        "POST"
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let response = preflight("https://evil.example.com").await;

    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

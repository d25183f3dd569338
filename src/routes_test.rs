use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;

async fn get_page(path: &str) -> (StatusCode, String) {
    let config = ServerConfig::from_values(None, None, None).unwrap();
    let app = app(&config).unwrap();

    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn known_route_renders_with_drawer_selection() {
    let (status, body) = get_page("/login").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("nav-drawer__link--selected"));
    assert_eq!(body.matches("aria-current=\"page\"").count(), 1);
}

#[tokio::test]
async fn unknown_path_renders_not_found_view() {
    let (status, body) = get_page("/dashboard").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found."), "body was {body:?}");
    assert!(!body.contains("nav-drawer__link--selected"));
}

// ABOUTME: Integration tests for the HTTP routes with the marketplace mocked by httpmock.
// ABOUTME: Drives the router in-process with tower's oneshot.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use httpmock::prelude::*;
use mirror_extractor::{Client, ItemRecord};
use mirror_server::{build_app, AppState, RenderMode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

const MARKETPLACE: &str = r#"<html><body><div class="grid">
    <a href="/#/item/1"><img src="https://cdn.kubeo.net/items/1.png">
        <p class="truncate">Crown &lt;b&gt;</p>
        <p><i class="ph ph-currency-circle-dollar"></i> 300</p></a>
    <a href="/#/item/2"><p class="truncate"></p></a>
</div></body></html>"#;

fn app(server: &MockServer, mode: RenderMode) -> Router {
    let client = Client::builder().build().unwrap();
    build_app(AppState::new(client, server.url("/marketplace"), mode))
}

fn mock_upstream(server: &MockServer, status: u16) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/marketplace");
        then.status(status)
            .header("content-type", "text/html; charset=utf-8")
            .body(MARKETPLACE);
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn api_items_returns_json_array() {
    let server = MockServer::start();
    let mock = mock_upstream(&server, 200);

    let (status, content_type, body) = get(app(&server, RenderMode::Server), "/api/items").await;
    mock.assert();

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("application/json"));
    let items: Vec<ItemRecord> = serde_json::from_str(&body).unwrap();
    assert_eq!(
        items,
        vec![
            ItemRecord {
                name: "Crown <b>".to_string(),
                price: "300".to_string(),
                image_url: "https://cdn.kubeo.net/items/1.png".to_string(),
                link_url: "https://kubeo.net/#/item/1".to_string(),
            },
            ItemRecord {
                name: "Unknown Item".to_string(),
                price: "Free".to_string(),
                image_url: String::new(),
                link_url: "https://kubeo.net/#/item/2".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn api_items_reports_upstream_failure() {
    let server = MockServer::start();
    mock_upstream(&server, 502);

    let (status, _, body) = get(app(&server, RenderMode::Server), "/api/items").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let error = json["error"].as_str().expect("error field");
    assert!(error.contains("HTTP status 502"), "unexpected error: {}", error);
}

#[tokio::test]
async fn api_items_empty_when_container_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/marketplace");
        then.status(200).body("<html><body><p>maintenance</p></body></html>");
    });

    let (status, _, body) = get(app(&server, RenderMode::Server), "/api/items").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn index_renders_escaped_cards() {
    let server = MockServer::start();
    let mock = mock_upstream(&server, 200);

    let (status, content_type, body) = get(app(&server, RenderMode::Server), "/").await;
    mock.assert();

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert_eq!(body.matches("<div class=\"card\">").count(), 2);
    assert!(body.contains("<p>Crown &lt;b&gt;</p>"));
    assert!(body.contains("<strong>300</strong>"));
}

#[tokio::test]
async fn index_shows_inline_error_on_failure() {
    let server = MockServer::start();
    mock_upstream(&server, 404);

    let (status, content_type, body) = get(app(&server, RenderMode::Server), "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type.starts_with("text/html"));
    assert!(body.contains("Error fetching items:"));
    assert!(body.contains("HTTP status 404"));
}

#[tokio::test]
async fn spa_mode_serves_shell_without_fetching() {
    let server = MockServer::start();
    let mock = mock_upstream(&server, 200);

    let (status, _, body) = get(app(&server, RenderMode::Spa), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("fetch('/api/items')"));
    mock.assert_hits(0);
}

#[tokio::test]
async fn health_does_not_touch_upstream() {
    let server = MockServer::start();
    let mock = mock_upstream(&server, 200);

    let (status, _, body) = get(app(&server, RenderMode::Server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
    mock.assert_hits(0);
}

// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Endpoint tests for POST /fetch
//!
//! These tests verify that:
//! - A missing `url` is rejected with 400 and "URL is required"
//! - Malformed URLs and failed fetches surface as 500
//! - Visible text is rewritten while link targets are left alone

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use fale_proxy::api::http_server::{create_app, AppState};
use scraper::{Html, Selector};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::mock_origin::{closed_port_url, MockOrigin};

/// Test helper: Build the app with default fetch settings
fn setup_app() -> Router {
    create_app(AppState::new_for_test())
}

/// Test helper: POST a raw body to /fetch and decode the JSON reply
async fn post_fetch(body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/fetch")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = setup_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_url(url: &str) -> (StatusCode, Value) {
    post_fetch(&json!({ "url": url }).to_string()).await
}

fn select_first<'a>(document: &'a Html, css: &str) -> scraper::ElementRef<'a> {
    let selector = Selector::parse(css).unwrap();
    document
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("no element matches {}", css))
}

#[tokio::test]
async fn test_missing_url_returns_400() {
    let (status, body) = post_fetch("{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_blank_url_returns_400() {
    let (status, body) = post_url("").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_invalid_url_returns_500() {
    let (status, body) = post_url("not-a-valid-url").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to fetch content:"), "{}", error);
    assert!(body.get("content").is_none());
}

#[tokio::test]
async fn test_unsupported_scheme_returns_500() {
    let (status, _) = post_url("ftp://example.com/file.txt").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_non_json_body_returns_400() {
    let (status, body) = post_fetch("url=https://www.yale.edu").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

/// Test helper: POST with no content type and decode the JSON reply
async fn post_untyped(body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/fetch")
        .body(body)
        .unwrap();

    let response = setup_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_missing_content_type_returns_400() {
    let (status, body) = post_untyped(Body::from(r#"{"url": "https://www.yale.edu"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_empty_body_returns_400() {
    let (status, body) = post_untyped(Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_empty_json_body_returns_400() {
    let (status, body) = post_fetch("").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_fetch_rewrites_yale_page() {
    let origin = MockOrigin::start().await;
    let (status, body) = post_url(&origin.url("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body.get("error").is_none());

    let content = body["content"].as_str().unwrap();
    let document = Html::parse_document(content);

    let title: String = select_first(&document, "title").text().collect();
    assert_eq!(title, "Fale University Test Page");

    let h1: String = select_first(&document, "h1").text().collect();
    assert_eq!(h1, "Welcome to Fale University");

    let first_link = select_first(&document, "a");
    let link_text: String = first_link.text().collect();
    assert_eq!(link_text, "About Fale");
    assert_eq!(
        first_link.value().attr("href"),
        Some("https://www.yale.edu/about")
    );
}

#[tokio::test]
async fn test_fetch_keeps_all_attribute_values() {
    let origin = MockOrigin::start().await;
    let (status, body) = post_url(&origin.url("/")).await;
    assert_eq!(status, StatusCode::OK);

    let document = Html::parse_document(body["content"].as_str().unwrap());
    let links = Selector::parse("a").unwrap();
    let hrefs: Vec<_> = document
        .select(&links)
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(
        hrefs,
        vec![
            "https://www.yale.edu/about",
            "https://www.yale.edu/admissions"
        ]
    );

    let img = select_first(&document, "img");
    assert_eq!(
        img.value().attr("src"),
        Some("https://www.yale.edu/images/logo.png")
    );
    assert_eq!(img.value().attr("alt"), Some("Yale Logo"));
}

#[tokio::test]
async fn test_fetch_rewrites_lowercase_occurrences() {
    let origin = MockOrigin::start().await;
    let (_, body) = post_url(&origin.url("/")).await;
    let content = body["content"].as_str().unwrap();

    assert!(content.contains("Founded in 1701, fale is one of the oldest"));
    assert!(content.contains("Fale University is a private Ivy League"));
}

#[tokio::test]
async fn test_fetch_page_without_term_unchanged_text() {
    let origin = MockOrigin::start().await;
    let (status, body) = post_url(&origin.url("/plain")).await;

    assert_eq!(status, StatusCode::OK);
    let document = Html::parse_document(body["content"].as_str().unwrap());
    let text: String = select_first(&document, "p").text().collect();
    assert_eq!(text, "Nothing to see here");
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let origin = MockOrigin::start().await;
    let (status, body) = post_url(&origin.url("/moved")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["content"]
        .as_str()
        .unwrap()
        .contains("Welcome to Fale University"));
}

#[tokio::test]
async fn test_upstream_404_returns_500() {
    let origin = MockOrigin::start().await;
    let (status, body) = post_url(&origin.url("/missing")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("status code 404"));
}

#[tokio::test]
async fn test_upstream_500_returns_500() {
    let origin = MockOrigin::start().await;
    let (status, body) = post_url(&origin.url("/broken")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("status code 500"));
}

#[tokio::test]
async fn test_connection_refused_returns_500() {
    let url = closed_port_url().await;
    let (status, body) = post_url(&url).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let origin = MockOrigin::start().await;
    let app = setup_app();

    let requests = [
        json!({ "url": origin.url("/") }),
        json!({}),
        json!({ "url": origin.url("/missing") }),
    ];

    let handles: Vec<_> = requests
        .iter()
        .map(|payload| {
            let app = app.clone();
            let request = Request::builder()
                .method(Method::POST)
                .uri("/fetch")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap();
            tokio::spawn(async move { app.oneshot(request).await.unwrap().status() })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    assert_eq!(
        statuses,
        vec![
            StatusCode::OK,
            StatusCode::BAD_REQUEST,
            StatusCode::INTERNAL_SERVER_ERROR
        ]
    );
}

//! Integration tests for the fragment endpoints
//!
//! Fragments must be standalone HTML subtrees: renderable without any
//! host-page state, never full documents, and byte-identical across
//! identical requests.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use splice_web::{AppState, router};
use tower::ServiceExt;

async fn get(path: &str) -> (StatusCode, String) {
    let app = router(AppState::new());
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn frag_js_carries_content_script_and_style() {
    let (status, body) = get("/fragment/frag/js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("123"));
    assert!(body.contains(r#"<span id="frag-text">"#));
    assert!(body.contains("<style>"));
    assert!(body.contains("textContent = 'xxx'"));
}

#[tokio::test]
async fn frag_alpine_registers_an_alpine_component() {
    let (status, body) = get("/fragment/frag/alpine").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<template x-if="false" data-name="frag">"#));
    assert!(body.contains("Alpine.data('frag'"));
}

#[tokio::test]
async fn fragments_are_never_full_documents() {
    for path in [
        "/fragment/frag/js",
        "/fragment/frag/alpine",
        "/fragment/calendar_nested",
        "/fragment/calendar_nested?date=2024-01-01",
    ] {
        let (status, body) = get(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(!body.contains("<html"), "{path} returned a document");
        assert!(!body.contains("<head"), "{path} returned a document");
    }
}

#[tokio::test]
async fn calendar_without_date_renders_empty_field() {
    let (status, body) = get("/fragment/calendar_nested").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<span class="date"></span>"#));
}

#[tokio::test]
async fn calendar_echoes_the_date_parameter() {
    let (status, body) = get("/fragment/calendar_nested?date=2024-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<span class="date">2024-01-01</span>"#));
}

#[tokio::test]
async fn calendar_escapes_markup_in_the_date_parameter() {
    let encoded = "%3Chtml%3E%3Cscript%3Ealert(1)%3C%2Fscript%3E";
    let (status, body) = get(&format!("/fragment/calendar_nested?date={encoded}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<html"), "fragment leaked an <html> element");
    assert!(body.contains("&lt;html&gt;"));
}

#[tokio::test]
async fn calendar_keeps_the_last_of_duplicate_date_params() {
    let (status, body) = get("/fragment/calendar_nested?date=ignored&date=2024-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<span class="date">2024-01-01</span>"#));
}

#[tokio::test]
async fn identical_requests_are_byte_identical() {
    for path in [
        "/fragment/frag/js",
        "/fragment/calendar_nested?date=2024-01-01",
    ] {
        let (_, first) = get(path).await;
        let (_, second) = get(path).await;
        assert_eq!(first, second, "{path} is not idempotent");
    }
}

#[tokio::test]
async fn api_lists_registered_components() {
    let (status, body) = get("/api/components").await;
    assert_eq!(status, StatusCode::OK);

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    let names: Vec<&str> = parsed["components"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["calendar_nested", "frag", "frag_alpine"]);
}

#[tokio::test]
async fn api_status_reports_uptime() {
    let (status, body) = get("/api/status").await;
    assert_eq!(status, StatusCode::OK);

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert!(parsed["uptime_seconds"].is_u64());
}

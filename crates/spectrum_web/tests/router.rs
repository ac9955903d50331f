use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use spectrum_backends::{MemoryMetricsBackend, MemoryNewsProvider};
use spectrum_core::{Article, Error, Headlines, HeadlinesQuery, NewsProvider, Result, Source};
use spectrum_web::{create_app, AppState, WebConfig};
use tower::ServiceExt;

struct BrokenProvider;

#[async_trait]
impl NewsProvider for BrokenProvider {
    async fn top_headlines(&self, _query: &HeadlinesQuery) -> Result<Headlines> {
        Err(Error::MalformedResponse("expected value at line 1".to_string()))
    }

    fn name(&self) -> &str {
        "broken"
    }
}

fn sample_headlines() -> Headlines {
    let article = |title: &str| Article {
        source: Source {
            id: String::new(),
            name: "Reuters".to_string(),
        },
        title: title.to_string(),
        url: format!("https://reuters.com/{}", title),
        ..Default::default()
    };
    Headlines {
        status: "ok".to_string(),
        total_results: 3,
        articles: vec![article("third"), article("first"), article("second")],
    }
}

fn app_with(news: Arc<dyn NewsProvider>) -> Router {
    let state = AppState::new(
        WebConfig::default(),
        news,
        Arc::new(MemoryMetricsBackend::new()),
    )
    .unwrap();
    create_app(state)
}

fn app() -> Router {
    app_with(Arc::new(MemoryNewsProvider::new(sample_headlines())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_about_page_goes_through_the_shell() {
    let app = app();
    let (status, html) = send(&app, get("/about")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-shell-state="empty""#));
    assert!(html.contains(r#"id="spectrum-nav-links""#));
    assert!(html.contains(r#"{"link":"/about","label":"About"}"#));
    assert!(html.contains("Meet Spectrum"));
}

#[tokio::test]
async fn test_home_lists_headlines_in_order() {
    let app = app();
    let (status, html) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let third = html.find(">third<").unwrap();
    let first = html.find(">first<").unwrap();
    let second = html.find(">second<").unwrap();
    assert!(third < first && first < second);
}

#[tokio::test]
async fn test_malformed_upstream_renders_error_page() {
    let app = app_with(Arc::new(BrokenProvider));
    let (status, html) = send(&app, get("/?category=science")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("read the news"));
    assert!(html.contains("app-header"));

    let (status, body) = send(&app, get("/api/headlines")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["message"].as_str().unwrap().contains("Malformed response"));
}

#[tokio::test]
async fn test_unknown_path_is_a_page() {
    let app = app();
    let (status, html) = send(&app, get("/pricing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
    assert!(html.contains(r#"class="app-navbar""#));
}

#[tokio::test]
async fn test_spectrum_flag_survives_refetch() {
    let app = app();
    let (status, _) = send(
        &app,
        post_json(
            "/api/articles/spectrum",
            json!({ "url": "https://reuters.com/first", "enabled": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, get("/api/headlines")).await;
    let headlines: Headlines = serde_json::from_str(&body).unwrap();
    let flags: Vec<_> = headlines
        .articles
        .iter()
        .map(|a| (a.title.as_str(), a.spectrum_enabled))
        .collect();
    assert_eq!(flags, vec![("third", false), ("first", true), ("second", false)]);

    let (_, html) = send(&app, get("/")).await;
    assert_eq!(html.matches(r#"class="spectrum-badge""#).count(), 1);
}

#[tokio::test]
async fn test_flag_needs_url() {
    let app = app();
    let (status, _) = send(
        &app,
        post_json("/api/articles/spectrum", json!({ "url": "", "enabled": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_each_submission_is_its_own_record() {
    let app = app();
    for _ in 0..2 {
        let (status, body) = send(
            &app,
            post_json("/api/metrics/9", json!({ "category": "tech", "source": "bbc" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let record: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(record["userID"], 9);
        assert_eq!(record["categoryToNumArticles"]["articleCount"], 1);
    }

    let (status, body) = send(&app, get("/api/metrics/9")).await;
    assert_eq!(status, StatusCode::OK);
    let metrics: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(metrics["records"].as_array().unwrap().len(), 2);
    assert_eq!(metrics["summary"]["categories"]["tech"], 2);
    assert_eq!(metrics["summary"]["sources"]["bbc"], 2);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

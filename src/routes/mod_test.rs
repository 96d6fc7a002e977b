use std::fs;

use reqwest::StatusCode;
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

use super::*;

// =============================================================
// Helpers
// =============================================================

const INDEX_HTML: &str = r#"<canvas id="squareCanvas"></canvas><div id="result"></div>"#;

/// Static tree with a page, a stylesheet, and a wasm-pack style `pkg/`.
fn static_tree() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    fs::write(dir.path().join("style.css"), "canvas { border: 0; }").unwrap();
    fs::create_dir(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg").join("canvas.js"), "export default function init() {}").unwrap();
    dir
}

/// Serve `app()` on an ephemeral port; the returned dir must outlive the requests.
async fn spawn_app() -> (TempDir, String) {
    let dir = static_tree();
    let router = app(AppState::default(), dir.path());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    (dir, format!("http://{addr}"))
}

async fn get(url: String) -> (StatusCode, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

// =============================================================
// Static hosting
// =============================================================

#[tokio::test]
async fn healthz_answers_ok() {
    let (_dir, base) = spawn_app().await;
    assert_eq!(get(format!("{base}/healthz")).await, (StatusCode::OK, "ok".to_owned()));
}

#[tokio::test]
async fn root_serves_index_page() {
    let (_dir, base) = spawn_app().await;
    let (status, body) = get(format!("{base}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);
}

#[tokio::test]
async fn static_and_pkg_are_served_from_static_dir() {
    let (_dir, base) = spawn_app().await;
    let (status, body) = get(format!("{base}/static/style.css")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("canvas"));

    let (status, body) = get(format!("{base}/pkg/canvas.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("init"));
}

#[tokio::test]
async fn missing_static_file_is_not_found() {
    let (_dir, base) = spawn_app().await;
    let (status, _) = get(format!("{base}/static/missing.css")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================
// API
// =============================================================

#[tokio::test]
async fn calculate_is_routed_and_reports_missing_scorer() {
    let (_dir, base) = spawn_app().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/calculate"))
        .json(&json!({ "x1": 0, "y1": 1012, "x2": 2024, "y2": 51 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Scoring service not configured" }));
}

//! Router tests driven through `tower::ServiceExt`

#![allow(clippy::unwrap_used)]

use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;
use visconti_core::{Config, Locale};
use visconti_server::build_app;

const INDEX: &str = "<!doctype html><title>Visconti Admin</title>";

fn bundle() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::write(dir.path().join("app.js"), "console.log('admin');").unwrap();
    dir
}

fn config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.server.assets_dir = dir.path().to_path_buf();
    config.api.base_url = "https://api.visconti.example/".to_string();
    config.ui.locale = Locale::It;
    config
}

async fn get(dir: &TempDir, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = build_app(config(dir))
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let dir = bundle();
    let (status, _, body) = get(&dir, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_config_document() {
    let dir = bundle();
    let (status, content_type, body) = get(&dir, "/config.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "apiBaseUrl": "https://api.visconti.example/",
            "locale": "it"
        })
    );
}

#[tokio::test]
async fn test_bundle_files_are_served() {
    let dir = bundle();
    let (status, _, body) = get(&dir, "/app.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('admin');");
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dir = bundle();

    for uri in ["/", "/admin/login", "/admin/menu-img", "/no/such/page"] {
        let (status, _, body) = get(&dir, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, INDEX, "{uri}");
    }
}

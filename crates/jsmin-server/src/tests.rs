use crate::config::JsminConfig;
use crate::error::ApiError;
use crate::resolve::{apply_routes, candidates, decode_path, is_safe, mimetype};
use crate::state::AppState;
use crate::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tower::ServiceExt;

fn site(root: &Path) -> JsminConfig {
    fs::write(root.join("app.min.js"), "var a = 1; // one\n").unwrap();
    fs::write(root.join("plain.js"), "var  keep = 1;").unwrap();
    fs::write(root.join("bad.min.js"), "var s = 'open").unwrap();
    fs::write(root.join("index.html"), "<p>hi</p>").unwrap();
    fs::create_dir_all(root.join("assets/js")).unwrap();
    fs::write(root.join("assets/js/lib.min.js"), "f( 1 )").unwrap();
    fs::create_dir_all(root.join("folder.js")).unwrap();
    fs::write(root.join("my file.min.js"), "let  x = [ 1 ];").unwrap();

    let mut config = JsminConfig::default();
    config.server.root = root.to_path_buf();
    config.routes.insert("/static".into(), "/assets".into());
    config
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    send(state, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn send(state: &AppState, req: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let resp = app_with_state(state.clone()).oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

fn error_code(body: &[u8]) -> String {
    let v: Value = serde_json::from_slice(body).unwrap();
    v["error"]["code"].as_str().unwrap().to_string()
}

// ========== Resolution ==========

#[test]
fn test_candidates() {
    assert_eq!(candidates("/js/app.js"), vec!["js/app.min.js", "js/app.js"]);
    assert_eq!(candidates("/style.css"), vec!["style.css"]);
    assert_eq!(candidates("/"), vec![""]);
}

#[test]
fn test_apply_routes_longest_prefix() {
    let mut routes = BTreeMap::new();
    routes.insert("/js".to_string(), "/app/js".to_string());
    routes.insert("/js/vendor".to_string(), "/third_party/".to_string());
    assert_eq!(apply_routes(&routes, "/js/main.js"), "/app/js/main.js");
    assert_eq!(apply_routes(&routes, "/js/vendor/x.js"), "/third_party/x.js");
    assert_eq!(apply_routes(&routes, "/css/a.css"), "/css/a.css");
    assert_eq!(apply_routes(&routes, "/js"), "/app/js");
}

#[test]
fn test_mimetype() {
    assert_eq!(mimetype("/a.js"), "application/javascript");
    assert_eq!(mimetype("/a.css"), "text/css");
    assert_eq!(mimetype("/index.html"), "text/html");
    assert_eq!(mimetype("/notes"), "text/plain");
    assert_eq!(mimetype("/dir.d/notes"), "text/plain");
}

#[test]
fn test_is_safe() {
    assert!(is_safe("/a/b.js"));
    assert!(is_safe("/a..b.js"));
    assert!(!is_safe("/../etc/passwd"));
    assert!(!is_safe("/a/../../b"));
}

#[test]
fn test_decode_path() {
    assert_eq!(decode_path("/my%20file.js").as_deref(), Some("/my file.js"));
    assert_eq!(decode_path("/caf%C3%A9.css").as_deref(), Some("/caf\u{e9}.css"));
    assert_eq!(decode_path("/plain.js").as_deref(), Some("/plain.js"));
    assert_eq!(decode_path("/%FF.js"), None);
}

#[test]
fn test_error_severity() {
    assert!(!ApiError::not_found("x").is_server_fault());
    assert!(!ApiError::method_not_allowed("x").is_server_fault());
    assert!(!ApiError::bad_request("x").is_server_fault());
    assert!(ApiError::compile_error("x").is_server_fault());
    assert!(ApiError::internal("x").is_server_fault());
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let config = JsminConfig::default();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.root, Path::new("."));
    assert!(config.routes.is_empty());
    assert!(!config.unmanaged.copy);
    assert_eq!(config.log_level(), "info");
}

#[test]
fn test_config_partial_json() {
    let config: JsminConfig =
        serde_json::from_str(r#"{"verbose": true, "server": {"port": 8000}}"#).unwrap();
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.log_level(), "debug");
}

#[test]
fn test_config_save_and_load() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("jsmin.json");
    let mut config = JsminConfig::default();
    config.routes.insert("/js".into(), "/src".into());
    config.unmanaged.copy = true;
    config.save(&path).unwrap();

    let loaded = JsminConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(loaded.routes.get("/js").map(String::as_str), Some("/src"));
    assert!(loaded.unmanaged.copy);
}

#[test]
fn test_config_explicit_missing_fails() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(JsminConfig::load(Some(tmp.path().join("nope.json").as_path())).is_err());
}

#[test]
fn test_config_invalid_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let err = JsminConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("Configuration is not valid"));
}

#[test]
fn test_config_init_writes_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("jsmin.json");
    JsminConfig::init(&path).unwrap();
    let loaded = JsminConfig::load(Some(path.as_path())).unwrap();
    assert_eq!(loaded.server.port, 9090);
    assert!(loaded.routes.is_empty());
}

#[test]
fn test_config_init_keeps_existing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("jsmin.json");
    let existing = r#"{"routes": {"/js": "/src"}}"#;
    fs::write(&path, existing).unwrap();

    let err = JsminConfig::init(&path).unwrap_err();
    assert!(err.to_string().contains("A config file already exists at"));
    assert_eq!(fs::read_to_string(&path).unwrap(), existing);
}

#[test]
fn test_config_flags() {
    let mut config = JsminConfig::default();
    config.apply_flags(false, false, true);
    assert_eq!(config.log_level(), "trace");

    let mut config = JsminConfig::default();
    config.apply_flags(true, true, true);
    assert!(config.quiet);
    assert!(!config.verbose);
    assert!(!config.debug);
    assert_eq!(config.log_level(), "error");
}

// ========== HTTP ==========

#[tokio::test]
async fn test_health() {
    let state = AppState::default();
    let (status, _, body) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["status"], "ok");
}

#[tokio::test]
async fn test_serves_minified_source() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, content_type, body) = get(&state, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/javascript"));
    assert_eq!(body, b"var a=1;");
}

#[tokio::test]
async fn test_serves_plain_source_verbatim() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, _, body) = get(&state, "/plain.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"var  keep = 1;");
}

#[tokio::test]
async fn test_serves_other_resources() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, content_type, body) = get(&state, "/index.html").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/html"));
    assert_eq!(body, b"<p>hi</p>");
}

#[tokio::test]
async fn test_routes_prefix() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, _, body) = get(&state, "/static/js/lib.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"f(1)");
}

#[tokio::test]
async fn test_missing_resource() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, _, body) = get(&state, "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "not_found");
}

#[tokio::test]
async fn test_directory_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, _, body) = get(&state, "/folder.js").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "bad_request");
}

#[tokio::test]
async fn test_compile_error() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, _, body) = get(&state, "/bad.js").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_code(&body), "compile_error");
    assert_eq!(state.stats.snapshot().failed, 1);
}

#[tokio::test]
async fn test_parent_path_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, _, _) = get(&state, "/../secret.js").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_percent_encoded_path() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, content_type, body) = get(&state, "/my%20file.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/javascript"));
    assert_eq!(body, b"let x=[1];");
}

#[tokio::test]
async fn test_encoded_parent_path_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let (status, _, body) = get(&state, "/%2E%2E/secret.js").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "bad_request");
}

#[tokio::test]
async fn test_post_not_allowed() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    let req = Request::builder().method("POST").uri("/app.js").body(Body::empty()).unwrap();
    let (status, _, body) = send(&state, req).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(error_code(&body), "method_not_allowed");
}

#[tokio::test]
async fn test_stats() {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::new(site(tmp.path()));
    get(&state, "/app.js").await;
    get(&state, "/plain.js").await;
    let (status, _, body) = get(&state, "/stats").await;
    assert_eq!(status, StatusCode::OK);
    let v: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(v["served"], 2);
    assert_eq!(v["compiled"], 1);
    assert_eq!(v["failed"], 0);
}

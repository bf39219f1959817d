use axum::{
    extract::State,
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use jsmin_compiler::{can_compile, new_compiler, CompileContext};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::error::ApiError;
use crate::resolve::{apply_routes, candidates, decode_path, is_safe, mimetype};
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.stats.snapshot()))
}

/// Serve any other path by compiling the first matching resource under the
/// server root.
pub async fn serve_resource(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    if method != Method::GET {
        return Err(ApiError::method_not_allowed(format!("{method} {}", uri.path())));
    }
    let decoded = decode_path(uri.path())
        .ok_or_else(|| ApiError::bad_request(format!("Invalid resource path: {}", uri.path())))?;
    let path = decoded.as_str();
    if !is_safe(path) {
        return Err(ApiError::bad_request(format!("Invalid resource path: {path}")));
    }

    let routed = apply_routes(&state.config.routes, path);
    let candidates = candidates(&routed);
    tracing::debug!("{} {} \u{2192} {{{}}}", method, path, candidates.join(", "));

    for candidate in &candidates {
        let file = state.config.server.root.join(candidate);
        let meta = match tokio::fs::metadata(&file).await {
            Ok(meta) => meta,
            Err(_) => continue,
        };
        if meta.is_dir() {
            return Err(ApiError::bad_request(format!("Resource is not a file: {candidate}")));
        }
        if !state.config.quiet {
            tracing::info!("{} {} \u{2192} {}", method, path, candidate);
        }
        return match compile_file(file).await {
            Ok(body) => {
                state.stats.record_served(can_compile(Path::new(candidate)));
                Ok(([(header::CONTENT_TYPE, mimetype(path))], body).into_response())
            }
            Err(err) => {
                state.stats.record_failed();
                Err(err)
            }
        };
    }

    Err(ApiError::not_found(format!("No such resource: {path}")))
}

async fn compile_file(file: PathBuf) -> Result<Vec<u8>, ApiError> {
    let source = tokio::fs::read(&file)
        .await
        .map_err(|e| ApiError::internal(format!("Could not read {}: {e}", file.display())))?;

    let compiled = tokio::task::spawn_blocking(move || {
        let compiler = new_compiler(&file);
        let mut ctx = CompileContext::new();
        let mut output = Vec::with_capacity(source.len());
        compiler
            .compile(&mut ctx, &file, &mut source.as_slice(), &mut output)
            .map(|_| output)
    })
    .await
    .map_err(|e| ApiError::internal(e.to_string()))??;

    Ok(compiled)
}

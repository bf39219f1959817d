//! jsmin development server (Axum).
//!
//! Serves resources from a root directory, minifying `.min.js` sources on
//! the fly so `/app.js` is answered from `app.min.js` when it exists.

pub mod config;
pub mod error;
pub mod resolve;
pub mod routes;
pub mod state;

use axum::Router;
use config::JsminConfig;
use state::AppState;

/// Build the application router for a configuration.
pub fn app(config: JsminConfig) -> Router {
    app_with_state(AppState::new(config))
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .fallback(routes::serve_resource)
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: JsminConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Starting the jsmin server: http://localhost:{}/ (root {})",
        config.server.port,
        config.server.root.display()
    );
    axum::serve(listener, app(config)).await?;
    Ok(())
}

#[cfg(test)]
mod tests;

//! Fragment demo web server
//!
//! Host pages are full documents; everything under `/fragment/frag` and
//! `/fragment/calendar_nested` is an HTML subtree meant for client-side
//! splicing. JSON endpoints sit beside them for external clients.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::routing::get;
use splice_core::{ComponentRegistry, SpliceConfig};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::components;
use crate::handlers::{
    api_components, api_status, calendar_nested_fragment, frag_alpine_fragment, frag_js_fragment,
};
use crate::pages::{alpine_page, htmx_page, index_page, vanilla_page};

/// Shared state handed to every request handler.
///
/// The registry is immutable after startup; cloning the state clones an
/// `Arc`, not the registry.
#[derive(Clone)]
pub struct AppState {
    /// Registry the fragment endpoints render from.
    pub registry: Arc<ComponentRegistry>,
    /// Server start time, for uptime reporting.
    pub server_started_at: Instant,
}

impl AppState {
    /// Creates state with the built-in component registry.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(components::builtin_registry()),
            server_started_at: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the demo router. Separate from [`run_server`] so tests can
/// drive it without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Host pages (full documents)
        .route("/", get(index_page))
        .route("/fragment/base/js", get(vanilla_page))
        .route("/fragment/base/alpine", get(alpine_page))
        .route("/fragment/base/htmx", get(htmx_page))
        // Fragment endpoints (HTML subtrees only)
        .route("/fragment/frag/js", get(frag_js_fragment))
        .route("/fragment/frag/alpine", get(frag_alpine_fragment))
        .route("/fragment/calendar_nested", get(calendar_nested_fragment))
        // JSON API endpoints (for external clients)
        .route("/api/components", get(api_components))
        .route("/api/status", get(api_status))
        // Static assets
        .nest_service("/static", ServeDir::new("splice-web/static"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the demo server until shutdown.
///
/// # Errors
/// - `Box<dyn std::error::Error>` - Bind or serve failure
pub async fn run_server(config: SpliceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "splice demo server running");
    axum::serve(listener, app).await?;
    Ok(())
}

//! JSON API endpoints for external clients

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::server::AppState;

/// Lists the registered component names.
pub async fn api_components(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "components": state.registry.names(),
    }))
}

/// Reports server health and uptime.
pub async fn api_status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_seconds": state.server_started_at.elapsed().as_secs(),
    }))
}

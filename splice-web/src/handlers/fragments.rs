//! Fragment endpoints
//!
//! Each handler renders one registered component in isolation and returns
//! the HTML subtree with its CSS and JS inlined. Responses are pure
//! functions of the query parameters, so identical requests produce
//! byte-identical bodies.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use splice_core::RenderContext;

use crate::server::AppState;

fn render_fragment(
    state: &AppState,
    name: &str,
    ctx: &RenderContext,
) -> Result<Html<String>, StatusCode> {
    match state.registry.render_fragment(name, ctx) {
        Ok(body) => Ok(Html(body)),
        Err(err) => {
            tracing::error!(component = name, %err, "fragment render failed");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Serves the plain fragment loaded by the vanilla-JS and HTMX pages.
///
/// # Errors
/// - `StatusCode::NOT_FOUND` - Component missing from the registry
pub async fn frag_js_fragment(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    render_fragment(&state, "frag", &RenderContext::new())
}

/// Serves the Alpine-flavored fragment.
///
/// # Errors
/// - `StatusCode::NOT_FOUND` - Component missing from the registry
pub async fn frag_alpine_fragment(
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    render_fragment(&state, "frag_alpine", &RenderContext::new())
}

/// Serves the calendar fragment for the given `date` query parameter.
///
/// Parameters are read leniently: a missing `date` degrades to the empty
/// string and a repeated `date` keeps the last occurrence. This is a
/// display-only flow with no side effects, so malformed input never
/// fails the request.
///
/// # Errors
/// - `StatusCode::NOT_FOUND` - Component missing from the registry
pub async fn calendar_nested_fragment(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, StatusCode> {
    let date = params
        .into_iter()
        .rev()
        .find(|(key, _)| key == "date")
        .map(|(_, value)| value)
        .unwrap_or_default();

    let ctx = RenderContext::new().with_param("date", date);
    render_fragment(&state, "calendar_nested", &ctx)
}

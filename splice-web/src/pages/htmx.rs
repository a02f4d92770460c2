//! Attribute-driven host page: HTMX, no custom script at all

use axum::response::Html;

use super::shell;
use crate::components::layout;

/// Renders the HTMX host page.
///
/// The trigger carries the whole strategy declaratively: endpoint,
/// swap mode, and target. The endpoint is shared with the vanilla-JS
/// page; both strategies swap in the same plain fragment.
pub async fn htmx_page() -> Html<String> {
    let content = format!(
        r##"{header}
<main>
<div id="target">OLD</div>

<button id="loader" hx-get="/fragment/frag/js" hx-swap="outerHTML" hx-target="#target">
    Click me!
</button>
</main>"##,
        header = layout::page_header(
            "HTMX",
            Some("declare endpoint, swap, and target as attributes")
        ),
    );

    Html(
        shell("HTMX", "htmx")
            .head_tag(r#"<script src="https://unpkg.com/htmx.org@1.9.12"></script>"#)
            .push(content)
            .render(),
    )
}

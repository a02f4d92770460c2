//! Index page linking the three strategy demos

use axum::response::Html;

use super::shell;
use crate::components::layout;

/// Renders the demo index.
pub async fn index_page() -> Html<String> {
    let demos = [
        (
            "/fragment/base/js",
            "Vanilla JS",
            "Manual fetch and outerHTML replacement.",
        ),
        (
            "/fragment/base/alpine",
            "Alpine",
            "Reactive variable bound to the placeholder with x-html.",
        ),
        (
            "/fragment/base/htmx",
            "HTMX",
            "Fully declarative hx-get / hx-swap / hx-target attributes.",
        ),
    ];

    let cards: String = demos
        .iter()
        .map(|(href, title, blurb)| {
            layout::card(
                Some(title),
                &format!(r#"<p>{blurb}</p><a href="{href}">Open demo</a>"#),
            )
        })
        .collect();

    let content = format!(
        r#"{header}
<main>
{cards}
<p>There is also a parameterized fragment:
<a href="/fragment/calendar_nested?date=2024-01-01">/fragment/calendar_nested?date=2024-01-01</a></p>
</main>"#,
        header = layout::page_header(
            "Fragment loading strategies",
            Some("Three ways to splice a server-rendered fragment into a page")
        ),
    );

    Html(shell("Home", "home").push(content).render())
}

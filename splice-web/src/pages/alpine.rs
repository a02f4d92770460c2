//! Reactive-state host page: Alpine.js variable bound to the placeholder

use axum::response::Html;

use super::shell;
use crate::components::layout;

/// State cell plus fetch callback, declared on `<body>`. The placeholder's
/// content is a function of `htmlVar`, so assigning the fetched fragment
/// to it re-renders the placeholder without any manual DOM surgery.
const BODY_STATE: &str = r#"x-data="{
    htmlVar: 'OLD',
    loadFragment: function () {
        const url = '/fragment/frag/alpine';
        fetch(url)
            .then(response => response.text())
            .then(html => {
                console.log({ fragment: html });
                this.htmlVar = html;
            });
    }
}""#;

/// Renders the Alpine host page.
pub async fn alpine_page() -> Html<String> {
    let content = format!(
        r#"{header}
<main>
<div id="target" x-html="htmlVar">OLD</div>

<button id="loader" @click="loadFragment">
    Click me!
</button>
</main>"#,
        header = layout::page_header(
            "Alpine",
            Some("hold the fragment in a reactive variable, let x-html render it")
        ),
    );

    Html(
        shell("Alpine", "alpine")
            .head_tag(r#"<script defer src="https://unpkg.com/alpinejs"></script>"#)
            .body_attrs(BODY_STATE)
            .push(content)
            .render(),
    )
}

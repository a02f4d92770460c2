//! Immediate-replace host page: vanilla JS fetch + outerHTML swap

use axum::response::Html;

use super::{PLACEHOLDER, shell};
use crate::components::layout;

/// Fetches the fragment eagerly on click and replaces the placeholder
/// element wholesale. Replacing `outerHTML` re-parses the fragment, so
/// its embedded script executes after the swap.
const LOAD_SCRIPT: &str = r#"const url = '/fragment/frag/js';
document.querySelector('#loader').addEventListener('click', function () {
    fetch(url)
        .then(response => response.text())
        .then(html => {
            console.log({ fragment: html });
            document.querySelector('#target').outerHTML = html;
        });
});"#;

/// Renders the vanilla-JS host page.
pub async fn vanilla_page() -> Html<String> {
    let content = format!(
        r#"{header}
<main>
{placeholder}
</main>"#,
        header = layout::page_header(
            "Vanilla JS",
            Some("fetch() the fragment, swap it in with outerHTML")
        ),
        placeholder = PLACEHOLDER,
    );

    Html(
        shell("Vanilla JS", "js")
            .push(content)
            .script(LOAD_SCRIPT)
            .render(),
    )
}

//! Layout components - navigation, headers, cards

/// Renders the main navigation bar, highlighting the active demo.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let class = if page == active_page {
            "nav-link nav-active"
        } else {
            "nav-link"
        };
        format!(r#"<a href="{href}" class="{class}">{label}</a>"#)
    };

    format!(
        r#"<nav class="nav">
    <span class="nav-brand">Splice</span>
    {}
    {}
    {}
    {}
</nav>"#,
        nav_item("/", "Home", "home"),
        nav_item("/fragment/base/js", "Vanilla JS", "js"),
        nav_item("/fragment/base/alpine", "Alpine", "alpine"),
        nav_item("/fragment/base/htmx", "HTMX", "htmx"),
    )
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="subtitle">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<header class="page-header">
    <h1>{title}</h1>
    {subtitle_html}
</header>"#
    )
}

/// Renders a card container with an optional title.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| format!("<h3>{t}</h3>"))
        .unwrap_or_default();

    format!(
        r#"<div class="card">
    {header_html}
    {content}
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_highlights_active_page() {
        let nav = nav_bar("alpine");
        assert!(nav.contains(r#"href="/fragment/base/alpine" class="nav-link nav-active""#));
        assert!(nav.contains(r#"href="/fragment/base/js" class="nav-link""#));
    }

    #[test]
    fn card_without_title_has_no_heading() {
        assert!(!card(None, "<p>x</p>").contains("<h3>"));
        assert!(card(Some("T"), "<p>x</p>").contains("<h3>T</h3>"));
    }
}

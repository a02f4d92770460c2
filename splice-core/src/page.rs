//! Full-document assembly
//!
//! The [`Page`] builder collects body markup together with the CSS and JS
//! of every component included on the page, then renders a complete HTML
//! document with stylesheets injected into `<head>` and scripts at the end
//! of `<body>`. This is the document-side counterpart of
//! [`ComponentParts::into_fragment`]: the same parts, delivered through
//! the page shell instead of inline with the fragment.

use crate::component::ComponentParts;

/// Builder for a complete HTML document.
#[derive(Debug, Clone, Default)]
pub struct Page {
    title: String,
    body: String,
    body_attrs: String,
    styles: Vec<String>,
    head_tags: Vec<String>,
    body_scripts: Vec<String>,
}

impl Page {
    /// Creates an empty page with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets raw attributes on the `<body>` element, e.g. an Alpine
    /// `x-data` declaration.
    #[must_use]
    pub fn body_attrs(mut self, attrs: impl Into<String>) -> Self {
        self.body_attrs = attrs.into();
        self
    }

    /// Adds a raw tag to `<head>`, e.g. a CDN `<script src>` or a stylesheet link.
    #[must_use]
    pub fn head_tag(mut self, tag: impl Into<String>) -> Self {
        self.head_tags.push(tag.into());
        self
    }

    /// Appends raw markup to the body.
    #[must_use]
    pub fn push(mut self, html: impl Into<String>) -> Self {
        self.body.push_str(&html.into());
        self
    }

    /// Appends an inline script to run at the end of the body.
    #[must_use]
    pub fn script(mut self, js: impl Into<String>) -> Self {
        self.body_scripts.push(js.into());
        self
    }

    /// Splices a component into the body, routing its CSS into `<head>`
    /// and its JS to the end of `<body>`.
    #[must_use]
    pub fn include(mut self, parts: &ComponentParts) -> Self {
        self.body.push_str(&parts.html);
        if let Some(css) = &parts.css {
            self.styles.push(css.clone());
        }
        if let Some(js) = &parts.js {
            self.body_scripts.push(js.clone());
        }
        self
    }

    /// Renders the complete document.
    pub fn render(self) -> String {
        let style_block = if self.styles.is_empty() {
            String::new()
        } else {
            format!("\n    <style>{}</style>", self.styles.join("\n"))
        };

        let head_tags = self
            .head_tags
            .iter()
            .map(|tag| format!("\n    {tag}"))
            .collect::<String>();

        let body_scripts = self
            .body_scripts
            .iter()
            .map(|js| format!("\n    <script>{js}</script>"))
            .collect::<String>();

        let body_attrs = if self.body_attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", self.body_attrs)
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>{title}</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">{head_tags}{style_block}
</head>
<body{body_attrs}>
{body}{body_scripts}
</body>
</html>"#,
            title = self.title,
            body = self.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_css_lands_in_head_and_js_in_body() {
        let parts = ComponentParts::markup(r#"<div class="frag">123</div>"#)
            .with_css(".frag { background: blue; }")
            .with_js("init();");

        let html = Page::new("Demo").include(&parts).render();

        let head_end = html.find("</head>").unwrap();
        let body_start = html.find("<body").unwrap();
        let style = html.find("<style>").unwrap();
        let script = html.find("<script>init();</script>").unwrap();

        assert!(style < head_end, "component css must be inside <head>");
        assert!(script > body_start, "component js must be inside <body>");
        assert!(html.contains(r#"<div class="frag">123</div>"#));
    }

    #[test]
    fn body_attrs_are_emitted_on_the_body_tag() {
        let html = Page::new("Demo")
            .body_attrs(r#"x-data="{ open: false }""#)
            .push("<p>hi</p>")
            .render();
        assert!(html.contains(r#"<body x-data="{ open: false }">"#));
    }

    #[test]
    fn empty_page_has_no_style_or_script_blocks() {
        let html = Page::new("Demo").push("<p>hi</p>").render();
        assert!(!html.contains("<style>"));
        assert!(!html.contains("<script>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn head_tags_precede_the_body() {
        let html = Page::new("Demo")
            .head_tag(r#"<script defer src="https://unpkg.com/alpinejs"></script>"#)
            .push("<p>hi</p>")
            .render();
        let tag = html.find("https://unpkg.com/alpinejs").unwrap();
        assert!(tag < html.find("<body").unwrap());
    }
}

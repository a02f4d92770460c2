//! Component render model
//!
//! A component is a pure function from a [`RenderContext`] to
//! [`ComponentParts`]: an HTML subtree plus the inline CSS and JS that
//! travel with it. The same parts are usable from a full-document path
//! (where CSS/JS are injected into the page shell) and from a
//! fragment-only path (where they are serialized inline so a client-side
//! swap re-executes them).

use std::borrow::Cow;

use serde_json::Value;

/// Escapes HTML special characters (`&`, `<`, `>`, `"`, `'`) in text
/// destined for interpolation into markup.
///
/// Returns a borrowed reference when no escaping is needed. Request
/// parameters must pass through this before landing in component HTML;
/// otherwise a crafted parameter turns a fragment into arbitrary markup.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Output of a component render function.
///
/// Pure data; constructing it has no side effects, so rendering the same
/// context twice yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentParts {
    /// The component's HTML subtree. Never a full document.
    pub html: String,
    /// Inline stylesheet scoped to the component, if any.
    pub css: Option<String>,
    /// Inline script that finishes initializing the component, if any.
    pub js: Option<String>,
}

impl ComponentParts {
    /// Creates parts with markup only.
    pub fn markup(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            css: None,
            js: None,
        }
    }

    /// Attaches an inline stylesheet.
    #[must_use]
    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    /// Attaches an inline script.
    #[must_use]
    pub fn with_js(mut self, js: impl Into<String>) -> Self {
        self.js = Some(js.into());
        self
    }

    /// Serializes the parts for a fragment-only HTTP response.
    ///
    /// Emits the HTML subtree, then the CSS wrapped in `<style>`, then the
    /// JS wrapped in `<script>`. Script comes last so the elements it
    /// targets exist by the time it runs; a swap that re-parses the
    /// fragment therefore also re-executes the script.
    pub fn into_fragment(self) -> String {
        let mut out = self.html;
        if let Some(css) = self.css {
            out.push_str(&format!("\n<style>{css}</style>"));
        }
        if let Some(js) = self.js {
            out.push_str(&format!("\n<script>{js}</script>"));
        }
        out
    }
}

/// String-keyed parameter bag handed to component render functions.
///
/// Backed by a JSON object so request query parameters map onto it
/// directly. Missing or non-string keys read as the empty string, which
/// keeps display-only components from failing hard on absent parameters.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    params: Value,
}

impl RenderContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self {
            params: Value::Object(serde_json::Map::new()),
        }
    }

    /// Creates a context from a JSON value. Non-object values behave as
    /// an empty context.
    pub fn from_value(params: Value) -> Self {
        Self { params }
    }

    /// Sets a string parameter, replacing any previous value.
    #[must_use]
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        if let Value::Object(map) = &mut self.params {
            map.insert(key.to_string(), Value::String(value.into()));
        }
        self
    }

    /// Reads a parameter as a string slice, defaulting to empty.
    pub fn param(&self, key: &str) -> &str {
        self.params
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

//! The demo fragment, in plain-JS and Alpine flavors
//!
//! Both render the same visible content once loaded: the literal text
//! `123` plus a child element whose text the component's script sets to
//! `xxx`. The difference is purely in how the script finishes
//! initialization after the swap.

use splice_core::{ComponentParts, RenderContext};

const FRAG_CSS: &str = r#".frag {
    background: blue;
}"#;

/// Fragment whose script runs directly on insertion.
///
/// The span starts empty; the inline script fills it in once the swapped
/// element is re-parsed by the browser.
pub fn frag(_ctx: &RenderContext) -> ComponentParts {
    ComponentParts::markup(
        r#"<div class="frag">
    123
    <span id="frag-text"></span>
</div>"#,
    )
    .with_css(FRAG_CSS)
    .with_js(r#"document.querySelector('#frag-text').textContent = 'xxx';"#)
}

/// Fragment that defines an Alpine component.
///
/// The markup is wrapped in `<template x-if="false">` so it stays inert
/// until the script has registered the component with Alpine; the script
/// then flips `x-if` to activate every instance.
pub fn frag_alpine(_ctx: &RenderContext) -> ComponentParts {
    ComponentParts::markup(
        r#"<template x-if="false" data-name="frag">
    <div class="frag">
        123
        <span x-data="frag" x-text="fragVal"></span>
    </div>
</template>"#,
    )
    .with_css(FRAG_CSS)
    .with_js(
        r#"Alpine.data('frag', () => ({
    fragVal: 'xxx',
}));

// Component is defined, so instances using `x-data="frag"` can activate.
document.querySelectorAll('[data-name="frag"]').forEach((el) => {
    el.setAttribute('x-if', 'true');
});"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frag_carries_content_style_and_script() {
        let parts = frag(&RenderContext::new());
        assert!(parts.html.contains("123"));
        assert!(parts.html.contains(r#"<span id="frag-text">"#));
        assert!(parts.css.as_deref().unwrap().contains("background: blue"));
        assert!(parts.js.as_deref().unwrap().contains("'xxx'"));
    }

    #[test]
    fn frag_alpine_is_inert_until_activated() {
        let parts = frag_alpine(&RenderContext::new());
        assert!(parts.html.starts_with(r#"<template x-if="false""#));
        assert!(parts.js.as_deref().unwrap().contains("Alpine.data('frag'"));
    }

    #[test]
    fn both_flavors_are_fragments_not_documents() {
        for parts in [frag(&RenderContext::new()), frag_alpine(&RenderContext::new())] {
            let body = parts.into_fragment();
            assert!(!body.contains("<html"));
            assert!(!body.contains("<head"));
        }
    }
}

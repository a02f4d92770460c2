//! Host pages - one full document per update strategy
//!
//! Every host page contains exactly one placeholder (`#target`, initially
//! showing `OLD`) and one trigger (`#loader`). They differ only in the
//! client-side mechanism used to fetch the fragment and splice it into
//! the placeholder.

pub mod alpine;
pub mod htmx;
pub mod index;
pub mod vanilla;

pub use alpine::alpine_page;
pub use htmx::htmx_page;
pub use index::index_page;
pub use vanilla::vanilla_page;

use splice_core::Page;

use crate::components::layout;

/// Markup shared by all three strategy pages: the placeholder and the
/// trigger. The placeholder id must match the target each strategy swaps,
/// or the swap silently finds nothing.
pub(crate) const PLACEHOLDER: &str = r#"<div id="target">OLD</div>

<button id="loader">
    Click me!
</button>"#;

/// Starts a page with the shared chrome: stylesheet link and nav bar.
pub(crate) fn shell(title: &str, active_nav: &str) -> Page {
    Page::new(format!("{title} - Splice"))
        .head_tag(r#"<link rel="stylesheet" href="/static/app.css">"#)
        .push(layout::nav_bar(active_nav))
}

//! Calendar component rendered from a request parameter
//!
//! Takes a single `date` parameter. The value is echoed into the date
//! field (HTML-escaped); when it parses as an ISO date the weekday name
//! is shown next to it. A missing parameter renders an empty field
//! rather than failing, since this is a display-only flow.

use chrono::NaiveDate;
use splice_core::{ComponentParts, RenderContext, escape_html};

const CALENDAR_CSS: &str = r#".calendar-component {
    width: 200px;
    background: pink;
    padding: 10px;
}"#;

const CALENDAR_JS: &str = r#"document.querySelectorAll('.calendar-component').forEach((el) => {
    el.addEventListener('click', () => alert('Clicked calendar!'));
});"#;

/// Renders the calendar with the given `date` context parameter.
pub fn calendar_nested(ctx: &RenderContext) -> ComponentParts {
    let date = ctx.param("date");

    let weekday = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| format!(r#" <span class="weekday">({})</span>"#, d.format("%A")))
        .unwrap_or_default();

    // The parameter is untrusted request input; escape it so the fragment
    // stays a fragment.
    let date = escape_html(date);

    ComponentParts::markup(format!(
        r#"<div class="calendar-component">
    Today's date is <span class="date">{date}</span>{weekday}
</div>"#
    ))
    .with_css(CALENDAR_CSS)
    .with_js(CALENDAR_JS)
}

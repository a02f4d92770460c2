//! Request handlers for fragment and JSON API endpoints

pub mod api;
pub mod fragments;

pub use api::{api_components, api_status};
pub use fragments::{calendar_nested_fragment, frag_alpine_fragment, frag_js_fragment};

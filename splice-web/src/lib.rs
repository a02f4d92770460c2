//! Splice Web - fragment-loading demo server
//!
//! Serves three host pages, one per client-side update strategy (vanilla
//! JS, Alpine.js, HTMX), plus the fragment endpoints they load from. All
//! fragment endpoints return HTML subtrees only, never full documents.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};

//! Splice Core - component model and document assembly
//!
//! This crate provides the building blocks for server-rendered HTML
//! fragments: the component render model, the static component registry,
//! full-document assembly with CSS/JS dependency injection, and
//! configuration management.

pub mod component;
pub mod config;
pub mod page;
pub mod registry;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use component::{ComponentParts, RenderContext, escape_html};
pub use config::SpliceConfig;
pub use page::Page;
pub use registry::{ComponentEntry, ComponentRegistry, RegistryError};
pub use tracing_setup::init_tracing;

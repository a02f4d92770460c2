//! Static component registry
//!
//! Maps a component name to its render function. The registry is built
//! explicitly at startup and never mutated afterwards, so it can be shared
//! across request handlers behind an `Arc` without locking.

use std::collections::HashMap;

use crate::component::{ComponentParts, RenderContext};

/// Render function signature shared by every registered component.
pub type RenderFn = fn(&RenderContext) -> ComponentParts;

/// A named component and its render function.
#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry {
    /// Name the component is looked up by, e.g. `"calendar_nested"`.
    pub name: &'static str,
    /// Pure render function producing the component's parts.
    pub render: RenderFn,
}

/// Errors from component lookup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },
}

/// Explicit name-to-render-function registry.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    entries: HashMap<&'static str, ComponentEntry>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component. Re-registering a name replaces the previous
    /// entry and logs a warning.
    pub fn register(&mut self, entry: ComponentEntry) {
        if self.entries.insert(entry.name, entry).is_some() {
            tracing::warn!(component = entry.name, "replacing registered component");
        }
    }

    /// Looks up a component by name.
    pub fn get(&self, name: &str) -> Option<&ComponentEntry> {
        self.entries.get(name)
    }

    /// Renders a component's parts for the given context.
    ///
    /// # Errors
    /// - `RegistryError::UnknownComponent` - No component registered under `name`
    pub fn render(&self, name: &str, ctx: &RenderContext) -> Result<ComponentParts, RegistryError> {
        let entry = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent {
                name: name.to_string(),
            })?;
        Ok((entry.render)(ctx))
    }

    /// Renders a component as a standalone fragment body, inline CSS and
    /// JS included.
    ///
    /// # Errors
    /// - `RegistryError::UnknownComponent` - No component registered under `name`
    pub fn render_fragment(&self, name: &str, ctx: &RenderContext) -> Result<String, RegistryError> {
        Ok(self.render(name, ctx)?.into_fragment())
    }

    /// Registered component names, sorted for stable output.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

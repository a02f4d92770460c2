//! Demo components and shared page chrome
//!
//! Components are pure functions from a render context to their HTML,
//! CSS, and JS parts. They are usable in full pages or as standalone
//! fragment responses.

pub mod calendar;
pub mod frag;
pub mod layout;

use splice_core::{ComponentEntry, ComponentRegistry};

// Re-export main component functions
pub use calendar::calendar_nested;
pub use frag::{frag, frag_alpine};

/// Builds the registry of every fragment-servable component.
///
/// This is the explicit counterpart of framework auto-discovery: what is
/// listed here is what the fragment endpoints can render, nothing else.
pub fn builtin_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register(ComponentEntry {
        name: "frag",
        render: frag,
    });
    registry.register(ComponentEntry {
        name: "frag_alpine",
        render: frag_alpine,
    });
    registry.register(ComponentEntry {
        name: "calendar_nested",
        render: calendar_nested,
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_lists_all_fragments() {
        let registry = builtin_registry();
        assert_eq!(
            registry.names(),
            vec!["calendar_nested", "frag", "frag_alpine"]
        );
    }
}

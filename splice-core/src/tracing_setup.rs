//! Tracing setup for Splice
//!
//! Console-only subscriber with the level chosen by the caller and
//! overridable through `RUST_LOG`.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize tracing with console output at the given level.
///
/// `RUST_LOG`, when set, takes precedence over `console_level`.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If a global subscriber is already installed
pub fn init_tracing(console_level: Level) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_surfaces_the_error() {
        let _ = init_tracing(Level::INFO);
        // A global subscriber is now installed; installing another one
        // must report the failure instead of panicking.
        assert!(init_tracing(Level::INFO).is_err());
    }
}

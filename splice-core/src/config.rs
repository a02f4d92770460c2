//! Centralized configuration for Splice.
//!
//! All tunable parameters are defined here to avoid hard-coded values
//! scattered throughout the codebase.

/// Central configuration for all Splice components.
#[derive(Debug, Clone, Default)]
pub struct SpliceConfig {
    pub server: ServerConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

impl ServerConfig {
    /// Bind address in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

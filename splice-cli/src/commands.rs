//! CLI command implementations

use clap::Subcommand;
use splice_core::SpliceConfig;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the demo web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// List the registered components
    Components,
}

/// Dispatches a parsed command.
///
/// # Errors
/// - `Box<dyn std::error::Error>` - Server bind or serve failure
pub async fn handle_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve { host, port } => {
            let mut config = SpliceConfig::default();
            config.server.host = host;
            config.server.port = port;
            splice_web::run_server(config).await
        }
        Commands::Components => {
            let registry = splice_web::components::builtin_registry();
            for name in registry.names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

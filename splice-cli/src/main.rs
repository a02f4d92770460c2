//! Splice CLI
//!
//! Command-line access to the fragment demo server.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "splice")]
#[command(about = "A server-rendered HTML fragment-loading demo")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    splice_core::init_tracing(tracing::Level::INFO)?;

    let cli = Cli::parse();
    commands::handle_command(cli.command).await?;

    Ok(())
}

//! tokengate CLI
//!
//! Terminal-first interface for NFT-ownership verification.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokengate")]
#[command(version = "0.1.0")]
#[command(about = "tokengate - NFT-ownership verification for gated polls", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify NFT ownership for a wallet address
    Verify(commands::verify::VerifyArgs),

    /// Show the provider pipeline for the current configuration
    Providers(commands::providers::ProvidersArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Verify(args) => commands::verify::run(args).await,
        Commands::Providers(args) => commands::providers::run(args),
    };

    std::process::exit(exit_code);
}

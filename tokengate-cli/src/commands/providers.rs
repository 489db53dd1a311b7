//! Providers command implementation.
//!
//! Shows the pipeline the current configuration would build, in priority
//! order, so operators can see which backends a verification will touch.

use std::path::PathBuf;

use clap::Args;
use tokengate_core::ProviderKind;

use crate::{config, output};

/// Arguments for the providers command.
#[derive(Args)]
pub struct ProvidersArgs {
    /// Show the pipeline with the demo bypass enabled
    #[arg(long)]
    pub demo: bool,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Run the providers command.
pub fn run(args: ProvidersArgs) -> i32 {
    let mut config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&e.to_string());
            return 2;
        }
    };

    if args.demo {
        config.demo_mode = true;
    }

    output::header("Provider pipeline (priority order)");

    if config.demo_mode {
        output::kv(
            &ProviderKind::Demo.to_string(),
            "enabled, bypasses network for addresses containing \"demo\"",
        );
    }

    output::kv(
        &ProviderKind::ChainIndexer.to_string(),
        if config.indexer_api_key.is_some() {
            "configured"
        } else {
            "no credential, will be skipped"
        },
    );

    output::kv(
        &ProviderKind::PublicIndexer.to_string(),
        "ready (no credential required)",
    );

    output::kv(
        &ProviderKind::PurchaseLedger.to_string(),
        if config.ledger_api_token.is_some() {
            "configured (consulted only when an email is supplied)"
        } else {
            "no credential, will be skipped"
        },
    );

    println!();
    0
}

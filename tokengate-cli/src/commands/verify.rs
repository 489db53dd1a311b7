//! Verify command implementation.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tokengate_core::{AssetRecord, VerificationRequest};
use tokengate_verifier::OwnershipVerifier;

use crate::{config, output};

/// Arguments for the verify command.
#[derive(Args)]
pub struct VerifyArgs {
    /// Wallet address to check
    pub address: String,

    /// Target policy id (the gated collection)
    #[arg(short, long)]
    pub policy: String,

    /// Account email for purchase-history lookup
    #[arg(short, long)]
    pub email: Option<String>,

    /// Overall resolution budget in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Enable the deterministic demo bypass
    #[arg(long)]
    pub demo: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// JSON output structure.
#[derive(Serialize)]
struct JsonOutput<'a> {
    success: bool,
    address: &'a str,
    policy_id: &'a str,
    verified: bool,
    match_count: u64,
    source: String,
    assets: &'a [AssetRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the verify command.
pub async fn run(args: VerifyArgs) -> i32 {
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
    if let Some(secs) = args.timeout {
        config.resolution_budget_ms = Some(secs.saturating_mul(1000));
    }

    let verifier = OwnershipVerifier::new(config);

    let mut request = VerificationRequest::new(&args.address, &args.policy);
    if let Some(email) = &args.email {
        request = request.with_email(email);
    }

    match verifier.verify(&request).await {
        Ok(result) => {
            if args.json {
                let json = JsonOutput {
                    success: true,
                    address: &args.address,
                    policy_id: &args.policy,
                    verified: result.owns_asset,
                    match_count: result.match_count,
                    source: result.source.to_string(),
                    assets: &result.assets,
                    error: result.error.clone(),
                };
                println!("{}", serde_json::to_string_pretty(&json).unwrap());
            } else {
                output::header("Ownership verification");
                output::kv("Address", &args.address);
                output::kv("Policy", &args.policy);
                output::verification_summary(&result);
            }

            if result.owns_asset {
                0
            } else {
                1
            }
        }
        Err(e) => {
            if args.json {
                let json = JsonOutput {
                    success: false,
                    address: &args.address,
                    policy_id: &args.policy,
                    verified: false,
                    match_count: 0,
                    source: "none".to_string(),
                    assets: &[],
                    error: Some(e.to_string()),
                };
                println!("{}", serde_json::to_string_pretty(&json).unwrap());
            } else {
                output::error(&e.to_string());
            }
            2
        }
    }
}

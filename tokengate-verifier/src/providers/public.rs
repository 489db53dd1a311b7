//! Free public-indexer provider.
//!
//! The no-credential fallback backend. Same filtering and summing
//! semantics as the metered indexer, different wire shape: assets come as
//! separate `policy_id`/`asset_name` fields instead of whole units.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokengate_core::{AssetRecord, ProviderKind, VerificationRequest, VerificationResult};
use tracing::{debug, warn};

use crate::error::{Result, VerifyError};
use crate::provider::{validate_request, OwnershipProvider};
use crate::providers::indexer::trim_base_url;

/// One asset object in the public indexer's response.
#[derive(Debug, Deserialize)]
struct PolicyAsset {
    policy_id: String,
    #[serde(default)]
    asset_name: String,
    quantity: u64,
}

/// Provider backed by the free public-indexer API.
pub struct PublicIndexerProvider {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PublicIndexerProvider {
    /// Create a provider for the given endpoint. No credential needed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_base_url(base_url.into()),
            timeout,
        }
    }
}

#[async_trait]
impl OwnershipProvider for PublicIndexerProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::PublicIndexer
    }

    async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        validate_request(request)?;

        let url = format!("{}/address_assets", self.base_url);
        debug!(address = %request.address, "querying public indexer");

        let response = self
            .client
            .get(&url)
            .query(&[("_address", request.address.as_str())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| VerifyError::Unavailable {
                provider: ProviderKind::PublicIndexer,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(%status, "public indexer returned error status");
            return Err(VerifyError::Unavailable {
                provider: ProviderKind::PublicIndexer,
                message: format!("public indexer returned status {}", status),
            });
        }

        let entries: Vec<PolicyAsset> =
            response.json().await.map_err(|e| VerifyError::Unavailable {
                provider: ProviderKind::PublicIndexer,
                message: format!("malformed public indexer response: {}", e),
            })?;

        let assets: Vec<AssetRecord> = entries
            .iter()
            .filter(|entry| entry.policy_id == request.policy_id)
            .filter(|entry| entry.quantity > 0)
            .map(|entry| {
                AssetRecord::from_hex_parts(&entry.policy_id, &entry.asset_name, entry.quantity)
            })
            .collect();

        if assets.is_empty() {
            debug!(policy_id = %request.policy_id, "public indexer found no matching assets");
            Ok(VerificationResult::negative())
        } else {
            Ok(VerificationResult::confirmed(self.kind(), assets))
        }
    }
}

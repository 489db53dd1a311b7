//! Metered chain-indexer provider.
//!
//! The primary backend: an address-assets endpoint behind a `project_id`
//! credential header. Returns whole asset units with decimal-string
//! quantities; matching is a policy-id prefix check on the unit.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokengate_core::{AssetRecord, ProviderKind, VerificationRequest, VerificationResult};
use tracing::{debug, warn};

use crate::error::{Result, VerifyError};
use crate::provider::{validate_request, OwnershipProvider};

/// One asset line in the indexer's address-assets response.
#[derive(Debug, Deserialize)]
struct AddressAsset {
    unit: String,
    quantity: String,
}

/// Provider backed by the metered chain-indexer API.
pub struct ChainIndexerProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ChainIndexerProvider {
    /// Create a provider for the given endpoint.
    ///
    /// `api_key` may be `None`; the provider then reports
    /// [`VerifyError::NotConfigured`] and the resolver moves on.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_base_url(base_url.into()),
            api_key,
            timeout,
        }
    }

    /// Whether a credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl OwnershipProvider for ChainIndexerProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ChainIndexer
    }

    async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        validate_request(request)?;

        let api_key = self.api_key.as_ref().ok_or(VerifyError::NotConfigured {
            provider: ProviderKind::ChainIndexer,
        })?;

        let url = format!("{}/addresses/{}/assets", self.base_url, request.address);
        debug!(address = %request.address, "querying chain indexer");

        let response = self
            .client
            .get(&url)
            .header("project_id", api_key)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| VerifyError::Unavailable {
                provider: ProviderKind::ChainIndexer,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(%status, "chain indexer returned error status");
            return Err(VerifyError::Unavailable {
                provider: ProviderKind::ChainIndexer,
                message: format!("indexer returned status {}", status),
            });
        }

        let entries: Vec<AddressAsset> =
            response.json().await.map_err(|e| VerifyError::Unavailable {
                provider: ProviderKind::ChainIndexer,
                message: format!("malformed indexer response: {}", e),
            })?;

        let assets: Vec<AssetRecord> = entries
            .iter()
            .filter(|entry| entry.unit.starts_with(&request.policy_id))
            .map(|entry| {
                let quantity = entry.quantity.parse().unwrap_or(0);
                AssetRecord::from_unit(entry.unit.clone(), &request.policy_id, quantity)
            })
            .filter(|record| record.quantity > 0)
            .collect();

        if assets.is_empty() {
            debug!(policy_id = %request.policy_id, "chain indexer found no matching assets");
            Ok(VerificationResult::negative())
        } else {
            Ok(VerificationResult::confirmed(self.kind(), assets))
        }
    }
}

/// Strip a trailing slash so URL composition stays predictable.
pub(crate) fn trim_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

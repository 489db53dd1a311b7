//! Off-chain purchase-ledger provider.
//!
//! A proxy signal, not on-chain truth: a completed order containing assets
//! under the target policy counts as ownership. Keyed by account email, so
//! requests without one skip this provider entirely.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokengate_core::{AssetRecord, ProviderKind, VerificationRequest, VerificationResult};
use tracing::{debug, warn};

use crate::error::{Result, VerifyError};
use crate::provider::{validate_request, OwnershipProvider};
use crate::providers::indexer::trim_base_url;

/// Order status that counts toward ownership.
const COMPLETED_STATUS: &str = "completed";

/// Customer-lookup response: orders with their asset line items.
#[derive(Debug, Deserialize)]
struct CustomerRecord {
    #[serde(default)]
    orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
struct Order {
    status: String,
    #[serde(default)]
    assets: Vec<OrderAsset>,
}

#[derive(Debug, Deserialize)]
struct OrderAsset {
    policy_id: String,
    #[serde(default)]
    asset_name: String,
    quantity: u64,
}

/// Provider backed by the commerce purchase-ledger API.
pub struct PurchaseLedgerProvider {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    timeout: Duration,
}

impl PurchaseLedgerProvider {
    /// Create a provider for the given endpoint.
    ///
    /// `api_token` may be `None`; the provider then reports
    /// [`VerifyError::NotConfigured`] and the resolver moves on.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_base_url(base_url.into()),
            api_token,
            timeout,
        }
    }

    /// Whether a credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_token.is_some()
    }
}

#[async_trait]
impl OwnershipProvider for PurchaseLedgerProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::PurchaseLedger
    }

    fn applies_to(&self, request: &VerificationRequest) -> bool {
        request.email.is_some()
    }

    async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        validate_request(request)?;

        let api_token = self.api_token.as_ref().ok_or(VerifyError::NotConfigured {
            provider: ProviderKind::PurchaseLedger,
        })?;

        let Some(email) = request.email.as_deref() else {
            // applies_to filters this upstream; treat a direct call as a miss
            return Ok(VerificationResult::negative());
        };

        let url = format!("{}/customers/lookup", self.base_url);
        debug!(%email, "querying purchase ledger");

        let response = self
            .client
            .get(&url)
            .query(&[("email", email)])
            .bearer_auth(api_token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| VerifyError::Unavailable {
                provider: ProviderKind::PurchaseLedger,
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(%status, "purchase ledger returned error status");
            return Err(VerifyError::Unavailable {
                provider: ProviderKind::PurchaseLedger,
                message: format!("purchase ledger returned status {}", status),
            });
        }

        let customer: CustomerRecord =
            response.json().await.map_err(|e| VerifyError::Unavailable {
                provider: ProviderKind::PurchaseLedger,
                message: format!("malformed purchase ledger response: {}", e),
            })?;

        let assets: Vec<AssetRecord> = customer
            .orders
            .iter()
            .filter(|order| order.status == COMPLETED_STATUS)
            .flat_map(|order| order.assets.iter())
            .filter(|asset| asset.policy_id == request.policy_id)
            .filter(|asset| asset.quantity > 0)
            .map(|asset| {
                AssetRecord::from_hex_parts(&asset.policy_id, &asset.asset_name, asset.quantity)
            })
            .collect();

        if assets.is_empty() {
            debug!(policy_id = %request.policy_id, "no completed purchases under policy");
            Ok(VerificationResult::negative())
        } else {
            Ok(VerificationResult::confirmed(self.kind(), assets))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> PurchaseLedgerProvider {
        PurchaseLedgerProvider::new(
            "https://commerce.example/api",
            Some("tok_secret".to_string()),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_skipped_without_email() {
        let request = VerificationRequest::new("addr1xyz", "policyabc");
        assert!(!provider().applies_to(&request));
    }

    #[test]
    fn test_applies_with_email() {
        let request =
            VerificationRequest::new("addr1xyz", "policyabc").with_email("holder@example.com");
        assert!(provider().applies_to(&request));
    }

    #[tokio::test]
    async fn test_unconfigured_without_token() {
        let unconfigured =
            PurchaseLedgerProvider::new("http://localhost:1", None, Duration::from_secs(1));
        assert!(!unconfigured.is_configured());

        let request =
            VerificationRequest::new("addr1xyz", "policyabc").with_email("holder@example.com");
        let err = unconfigured.verify(&request).await.unwrap_err();
        assert!(matches!(err, VerifyError::NotConfigured { .. }));
    }
}

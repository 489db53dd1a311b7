//! Deterministic demo provider.
//!
//! Runs ahead of the real providers in demo/test configurations so local
//! runs never incur network latency. Constructed only when the config's
//! `demo_mode` flag is set; a production pipeline never contains it.

use async_trait::async_trait;
use tokengate_core::{
    encode_asset_name, AssetRecord, ProviderKind, VerificationRequest, VerificationResult,
};
use tracing::debug;

use crate::error::Result;
use crate::provider::{validate_request, OwnershipProvider};

/// Addresses containing this marker are recognized as demo wallets.
pub const DEMO_ADDRESS_MARKER: &str = "demo";

/// Display name given to the synthetic asset.
const DEMO_ASSET_NAME: &str = "DemoPass";

/// Deterministic bypass provider for demo/test configurations.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Create the demo provider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OwnershipProvider for DemoProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Demo
    }

    fn applies_to(&self, request: &VerificationRequest) -> bool {
        request.address.contains(DEMO_ADDRESS_MARKER)
    }

    async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        validate_request(request)?;

        debug!(address = %request.address, "demo address recognized, bypassing providers");
        let asset = AssetRecord::from_hex_parts(
            &request.policy_id,
            &encode_asset_name(DEMO_ASSET_NAME),
            1,
        );

        Ok(VerificationResult::confirmed(self.kind(), vec![asset]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applies_only_to_demo_addresses() {
        let provider = DemoProvider::new();

        assert!(provider.applies_to(&VerificationRequest::new("addr1demo42", "policyabc")));
        assert!(!provider.applies_to(&VerificationRequest::new("addr1q9x7m2", "policyabc")));
    }

    #[tokio::test]
    async fn test_synthetic_positive_result() {
        let provider = DemoProvider::new();
        let request = VerificationRequest::new("demo_wallet", "policyabc");

        let result = provider.verify(&request).await.unwrap();
        assert!(result.owns_asset);
        assert_eq!(result.match_count, 1);
        assert_eq!(result.source, ProviderKind::Demo);
        assert_eq!(result.assets[0].asset_name.as_deref(), Some(DEMO_ASSET_NAME));
        assert!(result.assets[0].unit.starts_with("policyabc"));
    }

    #[tokio::test]
    async fn test_invalid_request_still_rejected() {
        let provider = DemoProvider::new();
        let request = VerificationRequest::new("demo_wallet", "");
        assert!(provider.verify(&request).await.is_err());
    }
}

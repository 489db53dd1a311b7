//! Ownership verifier, the main public API.
//!
//! Wraps the fallback resolver with request validation and the
//! per-session result cache.

use std::time::Duration;

use tokengate_core::{ProviderKind, VerificationRequest, VerificationResult};
use tracing::debug;

use crate::cache::{CacheKey, VerificationCache};
use crate::config::VerifierConfig;
use crate::error::Result;
use crate::provider::{validate_request, OwnershipProvider};
use crate::providers::{
    ChainIndexerProvider, DemoProvider, PublicIndexerProvider, PurchaseLedgerProvider,
};
use crate::resolver::FallbackResolver;

/// Ownership verifier with ordered fallback and memoization.
///
/// The main entry point for gating callers. Builds its provider pipeline
/// once, at construction, from an explicit [`VerifierConfig`]; the demo
/// bypass exists only when the config says so.
///
/// Shareable behind `Arc` for concurrent resolutions; the cache is the
/// only shared mutable state.
///
/// # Example
///
/// ```rust,no_run
/// use tokengate_core::VerificationRequest;
/// use tokengate_verifier::{OwnershipVerifier, VerifierConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = VerifierConfig {
///         indexer_api_key: Some("proj_abc123".to_string()),
///         ..VerifierConfig::default()
///     };
///     let verifier = OwnershipVerifier::new(config);
///
///     let request = VerificationRequest::new("addr1q9x7m2v5xw", "d5e6bf05...");
///     let result = verifier.verify(&request).await?;
///
///     println!("{}", result);
///     Ok(())
/// }
/// ```
pub struct OwnershipVerifier {
    resolver: FallbackResolver,
    cache: VerificationCache,
    budget: Option<Duration>,
}

impl OwnershipVerifier {
    /// Build a verifier with the standard pipeline:
    /// demo bypass (when enabled) → chain indexer → public indexer →
    /// purchase ledger.
    pub fn new(config: VerifierConfig) -> Self {
        let timeout = config.http_timeout();
        let budget = config.resolution_budget();

        let mut providers: Vec<Box<dyn OwnershipProvider>> = Vec::new();
        if config.demo_mode {
            providers.push(Box::new(DemoProvider::new()));
        }
        providers.push(Box::new(ChainIndexerProvider::new(
            config.indexer_base_url,
            config.indexer_api_key,
            timeout,
        )));
        providers.push(Box::new(PublicIndexerProvider::new(
            config.public_base_url,
            timeout,
        )));
        providers.push(Box::new(PurchaseLedgerProvider::new(
            config.ledger_base_url,
            config.ledger_api_token,
            timeout,
        )));

        Self::with_providers(providers, budget, config.cache_capacity)
    }

    /// Build a verifier over a custom provider list.
    ///
    /// Used by embedders with their own backends and by tests with
    /// scripted providers.
    pub fn with_providers(
        providers: Vec<Box<dyn OwnershipProvider>>,
        budget: Option<Duration>,
        cache_capacity: usize,
    ) -> Self {
        Self {
            resolver: FallbackResolver::new(providers),
            cache: VerificationCache::new(cache_capacity),
            budget,
        }
    }

    /// Verify ownership for a request, consulting the cache first.
    ///
    /// Clean results (confirmed, or negative with every provider
    /// answering) are memoized per `(address, policy_id)`; failed results
    /// are not, so a later retry re-queries providers.
    ///
    /// # Errors
    ///
    /// Only [`crate::VerifyError::InvalidRequest`]; provider failures are
    /// folded into the returned result's `error` field.
    pub async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        self.verify_with_budget(request, self.budget).await
    }

    /// Verify ownership under a caller-supplied budget, overriding the
    /// configured one for this call. A warm cache still answers
    /// immediately regardless of budget.
    pub async fn verify_with_budget(
        &self,
        request: &VerificationRequest,
        budget: Option<Duration>,
    ) -> Result<VerificationResult> {
        validate_request(request)?;

        let key = CacheKey::from(request);
        if let Some(hit) = self.cache.get(&key) {
            debug!(address = %request.address, "returning cached verification result");
            return Ok(hit);
        }

        let result = self.resolver.resolve_with_budget(request, budget).await?;

        if result.error.is_none() {
            self.cache.put(key, result.clone());
        }

        Ok(result)
    }

    /// Drop the cached result for an address/policy pair, forcing the
    /// next verification to re-query providers. Returns whether an entry
    /// existed.
    pub fn invalidate(&self, address: &str, policy_id: &str) -> bool {
        self.cache.invalidate(address, policy_id)
    }

    /// Provider identities in priority order.
    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.resolver.provider_kinds()
    }

    /// Current number of cached results (for monitoring).
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pipeline_order() {
        let verifier = OwnershipVerifier::new(VerifierConfig::default());
        assert_eq!(
            verifier.provider_kinds(),
            vec![
                ProviderKind::ChainIndexer,
                ProviderKind::PublicIndexer,
                ProviderKind::PurchaseLedger,
            ]
        );
    }

    #[test]
    fn test_demo_mode_prepends_demo_provider() {
        let config = VerifierConfig {
            demo_mode: true,
            ..VerifierConfig::default()
        };
        let verifier = OwnershipVerifier::new(config);
        assert_eq!(verifier.provider_kinds()[0], ProviderKind::Demo);
    }

    #[tokio::test]
    async fn test_invalid_request_rejected_before_cache() {
        let verifier = OwnershipVerifier::new(VerifierConfig::default());
        let request = VerificationRequest::new("", "policyabc");

        assert!(verifier.verify(&request).await.is_err());
        assert_eq!(verifier.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_demo_result_is_cached() {
        let config = VerifierConfig {
            demo_mode: true,
            ..VerifierConfig::default()
        };
        let verifier = OwnershipVerifier::new(config);
        let request = VerificationRequest::new("demo_wallet", "policyabc");

        let first = verifier.verify(&request).await.unwrap();
        assert!(first.owns_asset);
        assert_eq!(verifier.cache_len(), 1);

        let second = verifier.verify(&request).await.unwrap();
        assert_eq!(first, second);

        assert!(verifier.invalidate("demo_wallet", "policyabc"));
        assert_eq!(verifier.cache_len(), 0);
    }
}

//! Ordered-fallback resolution.
//!
//! Providers are tried sequentially in a fixed priority order and the
//! first confirmed-positive answer wins; later providers are never
//! consulted. Sequential on purpose: parallel queries would waste metered
//! calls and could race conflicting answers about the same address.

use std::time::Duration;

use tokengate_core::{ProviderKind, VerificationRequest, VerificationResult};
use tracing::{debug, info, warn};

use crate::error::{Result, VerifyError};
use crate::provider::{validate_request, OwnershipProvider};

/// Iterates providers in priority order, first positive match wins.
pub struct FallbackResolver {
    providers: Vec<Box<dyn OwnershipProvider>>,
}

impl FallbackResolver {
    /// Create a resolver over an ordered provider list.
    pub fn new(providers: Vec<Box<dyn OwnershipProvider>>) -> Self {
        Self { providers }
    }

    /// Provider identities in priority order.
    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Resolve a request with no overall deadline.
    ///
    /// # Errors
    ///
    /// Only [`VerifyError::InvalidRequest`]; provider failures are folded
    /// into the returned result's `error` field.
    pub async fn resolve(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        self.resolve_with_budget(request, None).await
    }

    /// Resolve a request, abandoning remaining providers once `budget`
    /// elapses.
    ///
    /// On expiry the result is negative with a timeout indicator in
    /// `error`; the call returns within the budget rather than blocking
    /// the caller on a slow backend.
    pub async fn resolve_with_budget(
        &self,
        request: &VerificationRequest,
        budget: Option<Duration>,
    ) -> Result<VerificationResult> {
        validate_request(request)?;

        match budget {
            None => Ok(self.try_providers(request).await),
            Some(limit) => {
                match tokio::time::timeout(limit, self.try_providers(request)).await {
                    Ok(result) => Ok(result),
                    Err(_) => {
                        let budget_ms = limit.as_millis() as u64;
                        warn!(budget_ms, "resolution budget exceeded, abandoning providers");
                        Ok(VerificationResult::failed(
                            VerifyError::Timeout { budget_ms }.to_string(),
                        ))
                    }
                }
            }
        }
    }

    /// Walk the provider list until one confirms ownership.
    async fn try_providers(&self, request: &VerificationRequest) -> VerificationResult {
        let mut last_error: Option<String> = None;
        let mut last_skip: Option<String> = None;
        let mut attempted = 0usize;

        for provider in &self.providers {
            let kind = provider.kind();

            if !provider.applies_to(request) {
                debug!(provider = %kind, "skipped: required input absent");
                continue;
            }

            attempted += 1;
            match provider.verify(request).await {
                Ok(result) if result.owns_asset => {
                    info!(
                        provider = %kind,
                        match_count = result.match_count,
                        "ownership confirmed"
                    );
                    return result;
                }
                Ok(_) => {
                    debug!(provider = %kind, "no matching assets, trying next provider");
                }
                Err(err @ VerifyError::NotConfigured { .. }) => {
                    attempted -= 1;
                    debug!(provider = %kind, "skipped: not configured");
                    last_skip = Some(err.to_string());
                }
                Err(err) => {
                    warn!(provider = %kind, error = %err, "provider failed, trying next");
                    last_error = Some(err.to_string());
                }
            }
        }

        match (last_error, attempted) {
            (Some(error), _) => VerificationResult::failed(error),
            // Every provider was skipped; surface why as informational
            (None, 0) => match last_skip {
                Some(skip) => VerificationResult::failed(skip),
                None => VerificationResult::negative(),
            },
            (None, _) => VerificationResult::negative(),
        }
    }
}

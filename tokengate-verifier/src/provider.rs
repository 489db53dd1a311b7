//! The provider contract.
//!
//! Every verification backend implements [`OwnershipProvider`]; the
//! resolver iterates a fixed-priority list of boxed providers and trusts
//! the first positive answer.

use async_trait::async_trait;
use tokengate_core::{ProviderKind, VerificationRequest, VerificationResult};

use crate::error::{Result, VerifyError};

/// Contract implemented by each verification backend.
///
/// Implementations perform exactly one outbound query per `verify` call
/// and hold no shared mutable state beyond read-only configuration and a
/// cloned HTTP client, so one provider instance may serve concurrent
/// requests.
#[async_trait]
pub trait OwnershipProvider: Send + Sync {
    /// Identity reported in positive results.
    fn kind(&self) -> ProviderKind;

    /// Whether this provider can act on the request at all.
    ///
    /// Providers whose required input is absent (a purchase ledger with no
    /// email, the demo bypass with a non-demo address) return `false` and
    /// are skipped rather than attempted.
    fn applies_to(&self, request: &VerificationRequest) -> bool {
        let _ = request;
        true
    }

    /// Query the backend and normalize its answer.
    ///
    /// Returns a confirmed result carrying this provider's [`kind`] only
    /// when at least one matching asset was found; clean misses come back
    /// as [`VerificationResult::negative`].
    ///
    /// # Errors
    ///
    /// - [`VerifyError::InvalidRequest`] on blank address/policy, before
    ///   any network call
    /// - [`VerifyError::NotConfigured`] when the backend needs a
    ///   credential that is not set
    /// - [`VerifyError::Unavailable`] on transport errors or non-2xx
    ///   responses
    ///
    /// [`kind`]: OwnershipProvider::kind
    async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult>;
}

/// Reject blank mandatory fields before any provider work.
pub fn validate_request(request: &VerificationRequest) -> Result<()> {
    if request.address.trim().is_empty() {
        return Err(VerifyError::InvalidRequest {
            reason: "address must not be empty".to_string(),
        });
    }
    if request.policy_id.trim().is_empty() {
        return Err(VerifyError::InvalidRequest {
            reason: "policy id must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed() {
        let request = VerificationRequest::new("addr1xyz", "policyabc");
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_address() {
        let request = VerificationRequest::new("  ", "policyabc");
        let err = validate_request(&request).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidRequest { .. }));
        assert!(err.to_string().contains("address"));
    }

    #[test]
    fn test_validate_rejects_blank_policy() {
        let request = VerificationRequest::new("addr1xyz", "");
        let err = validate_request(&request).unwrap_err();
        assert!(err.to_string().contains("policy id"));
    }
}

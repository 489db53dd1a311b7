//! Verification request type.

use serde::{Deserialize, Serialize};

/// A single ownership-verification request.
///
/// Supplied by the session layer, immutable per call. The `address` is the
/// wallet identifier to check on-chain; `email` is only consulted by
/// off-chain providers that key purchases to an account rather than a
/// wallet.
///
/// # Example
///
/// ```rust
/// use tokengate_core::VerificationRequest;
///
/// let request = VerificationRequest::new("addr1q9x7m2v5xw", "d5e6bf05...")
///     .with_email("holder@example.com");
///
/// assert!(request.email.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Wallet address to check for matching assets.
    pub address: String,

    /// Target collection identifier. Assets sharing this policy id belong
    /// to the gated collection.
    pub policy_id: String,

    /// Account email, for purchase-history lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl VerificationRequest {
    /// Create a new request for an address/policy pair.
    pub fn new(address: impl Into<String>, policy_id: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            policy_id: policy_id.into(),
            email: None,
        }
    }

    /// Attach an account email for purchase-ledger lookups.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Whether both mandatory fields carry a non-blank value.
    pub fn is_well_formed(&self) -> bool {
        !self.address.trim().is_empty() && !self.policy_id.trim().is_empty()
    }
}

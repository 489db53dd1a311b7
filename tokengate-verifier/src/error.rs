//! Error types for the tokengate verifier.
//!
//! This module defines all error types that can occur during request
//! validation, provider queries, and fallback resolution.

use thiserror::Error;
use tokengate_core::ProviderKind;

/// Errors that can occur during verification operations.
///
/// Only [`VerifyError::InvalidRequest`] ever reaches the caller as an
/// `Err`; provider-level failures are captured by the resolver and folded
/// into the final result's `error` field.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Malformed input; fails fast with no network call.
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// Which constraint the input violated
        reason: String,
    },

    /// Provider has no credential set. A skip condition, not a failure.
    #[error("{provider} provider is not configured")]
    NotConfigured {
        /// The unconfigured provider
        provider: ProviderKind,
    },

    /// Network or HTTP failure for one provider.
    #[error("{provider} provider unavailable: {message}")]
    Unavailable {
        /// The failing provider
        provider: ProviderKind,
        /// Transport or HTTP status detail
        message: String,
    },

    /// Overall resolution exceeded the caller's time budget.
    #[error("verification timed out after {budget_ms}ms")]
    Timeout {
        /// The budget that was exceeded, in milliseconds
        budget_ms: u64,
    },
}

/// Result type alias for verifier operations.
pub type Result<T> = std::result::Result<T, VerifyError>;

//! Verifier configuration.
//!
//! An absent credential is a valid "provider not configured" state: the
//! affected provider is skipped during resolution, never a startup error.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default metered chain-indexer endpoint.
pub const DEFAULT_INDEXER_BASE_URL: &str = "https://cardano-mainnet.blockfrost.io/api/v0";

/// Default free public-indexer endpoint.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://api.koios.rest/api/v0";

/// Default purchase-ledger endpoint.
pub const DEFAULT_LEDGER_BASE_URL: &str = "https://commerce.tokengate.io/api";

/// Default per-provider HTTP timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Default number of cached `(address, policy_id)` results.
pub const DEFAULT_CACHE_CAPACITY: usize = 512;

/// Configuration consumed by the provider pipeline.
///
/// Deserializable from TOML so a front end can load it from a config file;
/// every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Base URL of the metered chain indexer.
    pub indexer_base_url: String,

    /// Credential for the metered chain indexer. `None` skips the
    /// provider.
    pub indexer_api_key: Option<String>,

    /// Base URL of the free public indexer (no credential needed).
    pub public_base_url: String,

    /// Base URL of the purchase-ledger backend.
    pub ledger_base_url: String,

    /// Bearer token for the purchase ledger. `None` skips the provider.
    pub ledger_api_token: Option<String>,

    /// Insert the deterministic demo provider ahead of the real ones.
    /// Must stay off in production configurations.
    pub demo_mode: bool,

    /// Per-provider HTTP request timeout, in seconds.
    pub http_timeout_secs: u64,

    /// Overall resolution budget, in milliseconds. `None` means no
    /// overall deadline beyond the per-request HTTP timeouts.
    pub resolution_budget_ms: Option<u64>,

    /// Capacity of the `(address, policy_id)` result cache.
    pub cache_capacity: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            indexer_base_url: DEFAULT_INDEXER_BASE_URL.to_string(),
            indexer_api_key: None,
            public_base_url: DEFAULT_PUBLIC_BASE_URL.to_string(),
            ledger_base_url: DEFAULT_LEDGER_BASE_URL.to_string(),
            ledger_api_token: None,
            demo_mode: false,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            resolution_budget_ms: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl VerifierConfig {
    /// Per-provider HTTP timeout as a [`Duration`].
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Overall resolution budget as a [`Duration`], if set.
    pub fn resolution_budget(&self) -> Option<Duration> {
        self.resolution_budget_ms.map(Duration::from_millis)
    }
}

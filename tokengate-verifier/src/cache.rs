//! Per-session result cache.
//!
//! Ownership is treated as static for a session, so repeated requests for
//! the same `(address, policy_id)` pair return the memoized result instead
//! of re-querying providers. Entries are never expired by time; callers
//! that need a fresh answer (a reconnected wallet, say) use
//! [`VerificationCache::invalidate`].

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tokengate_core::{VerificationRequest, VerificationResult};

/// Cache key: one entry per address/policy pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    address: String,
    policy_id: String,
}

impl CacheKey {
    /// Build a key from its parts.
    pub fn new(address: impl Into<String>, policy_id: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            policy_id: policy_id.into(),
        }
    }
}

impl From<&VerificationRequest> for CacheKey {
    fn from(request: &VerificationRequest) -> Self {
        Self::new(request.address.clone(), request.policy_id.clone())
    }
}

/// LRU-bounded memoization of verification results.
///
/// Concurrent reads and inserts are safe; last-writer-wins is acceptable
/// because results for one key are idempotent. Capacity only bounds
/// memory: eviction merely causes a re-query.
pub struct VerificationCache {
    entries: Mutex<LruCache<CacheKey, VerificationResult>>,
}

impl VerificationCache {
    /// Create a cache holding up to `capacity` results.
    pub fn new(capacity: usize) -> Self {
        let capacity =
            NonZeroUsize::new(capacity).unwrap_or_else(|| NonZeroUsize::new(1).unwrap());
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up a memoized result.
    pub fn get(&self, key: &CacheKey) -> Option<VerificationResult> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Store a result, replacing any previous entry for the key.
    pub fn put(&self, key: CacheKey, result: VerificationResult) {
        self.entries.lock().unwrap().put(key, result);
    }

    /// Drop the entry for an address/policy pair, forcing the next
    /// request to re-query providers. Returns whether an entry existed.
    pub fn invalidate(&self, address: &str, policy_id: &str) -> bool {
        let key = CacheKey::new(address, policy_id);
        self.entries.lock().unwrap().pop(&key).is_some()
    }

    /// Current number of cached results.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the cache holds no results.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

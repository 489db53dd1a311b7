//! Verification result structure.
//!
//! A [`VerificationResult`] is produced fresh per resolution attempt and
//! never mutated afterwards; a new resolution replaces the old result
//! wholesale. Long-term storage belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::asset::AssetRecord;
use crate::provider::ProviderKind;

/// Result of an ownership-verification attempt.
///
/// Invariants, upheld by the constructors:
/// - `owns_asset` implies `match_count > 0` and non-empty `assets`
/// - `source == ProviderKind::None` implies `!owns_asset`
/// - `match_count` is the sum of `quantity` over `assets`
///
/// # Example
///
/// ```rust
/// use tokengate_core::{AssetRecord, ProviderKind, VerificationResult};
///
/// let asset = AssetRecord::from_hex_parts("abc123", "4d6f6e61", 2);
/// let result = VerificationResult::confirmed(ProviderKind::PublicIndexer, vec![asset]);
///
/// assert!(result.owns_asset);
/// assert_eq!(result.match_count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the holder owns at least one asset under the policy.
    pub owns_asset: bool,

    /// Sum of quantities across matched assets.
    pub match_count: u64,

    /// Matched asset line items, in provider order.
    pub assets: Vec<AssetRecord>,

    /// Backend that confirmed ownership, or `None` when nothing did.
    pub source: ProviderKind,

    /// Diagnostic message when verification failed along the way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    /// Create a confirmed-positive result attributed to `source`.
    ///
    /// Callers pass only assets filtered to the requested policy with a
    /// non-zero total quantity; an empty or all-zero `assets` is a caller
    /// bug.
    pub fn confirmed(source: ProviderKind, assets: Vec<AssetRecord>) -> Self {
        let match_count: u64 = assets.iter().map(|a| a.quantity).sum();
        debug_assert!(match_count > 0, "confirmed result requires matched quantity");

        Self {
            owns_asset: match_count > 0,
            match_count,
            assets,
            source,
            error: None,
        }
    }

    /// Create a clean negative result: every consulted backend answered
    /// and none reported a match.
    pub fn negative() -> Self {
        Self {
            owns_asset: false,
            match_count: 0,
            assets: Vec::new(),
            source: ProviderKind::None,
            error: None,
        }
    }

    /// Create a negative result with a diagnostic message attached.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            owns_asset: false,
            match_count: 0,
            assets: Vec::new(),
            source: ProviderKind::None,
            error: Some(error.into()),
        }
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.owns_asset {
            write!(
                f,
                "ownership CONFIRMED via {} ({} matching asset{}, quantity {})",
                self.source,
                self.assets.len(),
                if self.assets.len() == 1 { "" } else { "s" },
                self.match_count
            )
        } else {
            write!(
                f,
                "ownership NOT CONFIRMED ({})",
                self.error.as_deref().unwrap_or("no matching assets")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assets() -> Vec<AssetRecord> {
        vec![
            AssetRecord::from_hex_parts("abc123", "4d6f6e61", 2),
            AssetRecord::from_hex_parts("abc123", "506978656c", 1),
        ]
    }

    #[test]
    fn test_confirmed_result() {
        let result = VerificationResult::confirmed(ProviderKind::ChainIndexer, sample_assets());

        assert!(result.owns_asset);
        assert_eq!(result.match_count, 3);
        assert_eq!(result.assets.len(), 2);
        assert_eq!(result.source, ProviderKind::ChainIndexer);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_negative_result() {
        let result = VerificationResult::negative();

        assert!(!result.owns_asset);
        assert_eq!(result.match_count, 0);
        assert!(result.assets.is_empty());
        assert_eq!(result.source, ProviderKind::None);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_failed_result() {
        let result = VerificationResult::failed("indexer returned status 502");

        assert!(!result.owns_asset);
        assert_eq!(result.source, ProviderKind::None);
        assert_eq!(result.error.as_deref(), Some("indexer returned status 502"));
    }

    #[test]
    fn test_match_count_sums_quantities() {
        let result = VerificationResult::confirmed(ProviderKind::PublicIndexer, sample_assets());
        let sum: u64 = result.assets.iter().map(|a| a.quantity).sum();
        assert_eq!(result.match_count, sum);
    }

    #[test]
    fn test_display_confirmed() {
        let result = VerificationResult::confirmed(ProviderKind::Demo, sample_assets());
        let display = result.to_string();
        assert!(display.contains("CONFIRMED"));
        assert!(display.contains("demo"));
        assert!(display.contains("quantity 3"));
    }

    #[test]
    fn test_display_not_confirmed() {
        let display = VerificationResult::failed("timed out").to_string();
        assert!(display.contains("NOT CONFIRMED"));
        assert!(display.contains("timed out"));
    }

    #[test]
    fn test_error_omitted_from_json_when_clean() {
        let json = serde_json::to_string(&VerificationResult::negative()).unwrap();
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let result = VerificationResult::confirmed(ProviderKind::ChainIndexer, sample_assets());
        let json = serde_json::to_string(&result).unwrap();
        let back: VerificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}

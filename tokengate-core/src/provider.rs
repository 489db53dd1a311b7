//! Provider identity.

use serde::{Deserialize, Serialize};

/// Identity of the backend that produced a verification decision.
///
/// Ordered from most to least authoritative: the metered chain indexer is
/// on-chain truth, the public indexer is on-chain truth on a free tier,
/// the purchase ledger is an off-chain proxy signal. `Demo` marks the
/// deterministic test bypass and `None` means no backend confirmed
/// ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Metered primary chain-indexer API.
    ChainIndexer,
    /// Free-tier public chain-indexer API.
    PublicIndexer,
    /// Off-chain purchase-history API.
    PurchaseLedger,
    /// Deterministic bypass for demo/test configurations.
    Demo,
    /// No backend confirmed ownership.
    None,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChainIndexer => write!(f, "chain-indexer"),
            Self::PublicIndexer => write!(f, "public-indexer"),
            Self::PurchaseLedger => write!(f, "purchase-ledger"),
            Self::Demo => write!(f, "demo"),
            Self::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ProviderKind::ChainIndexer.to_string(), "chain-indexer");
        assert_eq!(ProviderKind::PublicIndexer.to_string(), "public-indexer");
        assert_eq!(ProviderKind::PurchaseLedger.to_string(), "purchase-ledger");
        assert_eq!(ProviderKind::Demo.to_string(), "demo");
        assert_eq!(ProviderKind::None.to_string(), "none");
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&ProviderKind::PurchaseLedger).unwrap();
        assert_eq!(json, "\"purchase-ledger\"");

        let kind: ProviderKind = serde_json::from_str("\"chain-indexer\"").unwrap();
        assert_eq!(kind, ProviderKind::ChainIndexer);
    }
}

//! # tokengate Core
//!
//! **Layer 0: Data Model for NFT-Ownership Verification**
//!
//! This crate defines the types shared by every tokengate verification
//! backend: requests, matched asset records, provider identities, and
//! the final verification result handed to the gating layer.
//!
//! ## Features
//!
//! - **Minimal**: No network I/O, no async, plain data
//! - **Deterministic**: Asset units decompose the same way everywhere
//! - **Serializable**: Results can be persisted by an external store as-is
//!
//! ## Quick Start
//!
//! ```rust
//! use tokengate_core::{AssetRecord, ProviderKind, VerificationRequest, VerificationResult};
//!
//! let request = VerificationRequest::new(
//!     "addr1q9x7m2v5xw",
//!     "d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc",
//! );
//!
//! let asset = AssetRecord::from_unit(
//!     "d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc4d6f6e61",
//!     &request.policy_id,
//!     1,
//! );
//!
//! let result = VerificationResult::confirmed(ProviderKind::ChainIndexer, vec![asset]);
//! assert!(result.owns_asset);
//! assert_eq!(result.match_count, 1);
//! ```

pub mod asset;
pub mod provider;
pub mod request;
pub mod result;

// Re-export main types for convenience
pub use asset::{encode_asset_name, AssetRecord};
pub use provider::ProviderKind;
pub use request::VerificationRequest;
pub use result::VerificationResult;

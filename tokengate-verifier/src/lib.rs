//! # tokengate Verifier
//!
//! **Layer 1: Ordered-Fallback NFT-Ownership Verification**
//!
//! This crate answers one question: does this wallet hold at least one
//! asset under the target policy? It asks independent verification
//! backends in a fixed priority order: metered chain indexer, free public
//! indexer, off-chain purchase ledger. The first confirmed match wins and
//! carries provenance; results are memoized per `(address, policy_id)`
//! for the session.
//!
//! ## Features
//!
//! - **Declarative pipeline**: backends are [`OwnershipProvider`] objects
//!   assembled once at construction, not scattered conditionals
//! - **Resilient**: a failing backend is logged and the next one is tried;
//!   provider errors never panic the caller
//! - **Bounded**: an optional overall budget keeps one slow backend from
//!   blocking the gating layer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tokengate_core::VerificationRequest;
//! use tokengate_verifier::{OwnershipVerifier, VerifierConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let verifier = OwnershipVerifier::new(VerifierConfig::default());
//!
//!     let request = VerificationRequest::new(
//!         "addr1q9x7m2v5xw",
//!         "d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc",
//!     );
//!
//!     let result = verifier.verify(&request).await?;
//!     println!("owns asset: {} (source: {})", result.owns_asset, result.source);
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod provider;
pub mod providers;
pub mod resolver;
pub mod verifier;

// Re-export main types for convenience
pub use cache::{CacheKey, VerificationCache};
pub use config::VerifierConfig;
pub use error::{Result, VerifyError};
pub use provider::OwnershipProvider;
pub use providers::{
    ChainIndexerProvider, DemoProvider, PublicIndexerProvider, PurchaseLedgerProvider,
};
pub use resolver::FallbackResolver;
pub use verifier::OwnershipVerifier;

// Core types callers need alongside the verifier
pub use tokengate_core::{AssetRecord, ProviderKind, VerificationRequest, VerificationResult};

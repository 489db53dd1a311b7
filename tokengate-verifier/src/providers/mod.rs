//! Concrete verification backends.

pub mod demo;
pub mod indexer;
pub mod ledger;
pub mod public;

pub use demo::DemoProvider;
pub use indexer::ChainIndexerProvider;
pub use ledger::PurchaseLedgerProvider;
pub use public::PublicIndexerProvider;

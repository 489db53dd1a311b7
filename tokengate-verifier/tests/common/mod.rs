//! Scripted providers for resolver and cache tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokengate_core::{AssetRecord, ProviderKind, VerificationRequest, VerificationResult};
use tokengate_verifier::{OwnershipProvider, Result, VerifyError};

/// What a scripted provider does when invoked.
pub enum Outcome {
    /// Positive answer with the given total quantity.
    Confirm(u64),
    /// Clean negative.
    Miss,
    /// Provider-level failure with the given message.
    Fail(String),
    /// Missing credential.
    NotConfigured,
    /// Sleep for the duration, then answer a clean negative.
    Stall(Duration),
}

/// Provider that follows a script and counts its invocations.
pub struct ScriptedProvider {
    kind: ProviderKind,
    outcome: Outcome,
    requires_email: bool,
    calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn new(kind: ProviderKind, outcome: Outcome) -> Self {
        Self {
            kind,
            outcome,
            requires_email: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Skip this provider for requests without an email.
    pub fn requiring_email(mut self) -> Self {
        self.requires_email = true;
        self
    }

    /// Shared handle to the invocation counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl OwnershipProvider for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn applies_to(&self, request: &VerificationRequest) -> bool {
        !self.requires_email || request.email.is_some()
    }

    async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            Outcome::Confirm(quantity) => {
                let asset =
                    AssetRecord::from_hex_parts(&request.policy_id, "4d6f6e61", *quantity);
                Ok(VerificationResult::confirmed(self.kind, vec![asset]))
            }
            Outcome::Miss => Ok(VerificationResult::negative()),
            Outcome::Fail(message) => Err(VerifyError::Unavailable {
                provider: self.kind,
                message: message.clone(),
            }),
            Outcome::NotConfigured => Err(VerifyError::NotConfigured {
                provider: self.kind,
            }),
            Outcome::Stall(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(VerificationResult::negative())
            }
        }
    }
}

/// Count stored in a scripted provider's counter.
pub fn count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}

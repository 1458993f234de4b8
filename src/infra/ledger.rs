//! In-memory verification ledger
//!
//! Default backing for the orchestrator's idempotence guard. A
//! persisted key-value store can stand in behind the same trait when
//! verification must survive process restarts.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Hash256;
use crate::infra::{LedgerError, VerificationLedger};

/// Append-only in-memory verification set.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    commitments: RwLock<HashSet<Hash256>>,
    key_hashes: RwLock<HashSet<Hash256>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VerificationLedger for InMemoryLedger {
    async fn is_verified(&self, document_commitment: &Hash256) -> Result<bool, LedgerError> {
        Ok(self.commitments.read().await.contains(document_commitment))
    }

    async fn mark_verified(&self, document_commitment: &Hash256) -> Result<bool, LedgerError> {
        // Insert under the write lock doubles as check-and-set.
        Ok(self.commitments.write().await.insert(*document_commitment))
    }

    async fn is_key_verified(&self, public_key_hash: &Hash256) -> Result<bool, LedgerError> {
        Ok(self.key_hashes.read().await.contains(public_key_hash))
    }

    async fn mark_key_verified(&self, public_key_hash: &Hash256) -> Result<bool, LedgerError> {
        Ok(self.key_hashes.write().await.insert(*public_key_hash))
    }
}

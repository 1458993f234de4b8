//! Trait definitions for the verifier's external collaborators

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::Hash256;
use crate::infra::{LedgerError, OracleError};

/// The trusted verifier oracle.
///
/// Accepts `(verification_key, proof, public_inputs)` and answers with
/// a boolean. Implementations own all transport concerns; the
/// verification client depends only on this contract.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VerifierOracle: Send + Sync {
    /// Issue one verification call, bounded by `gas_limit`.
    async fn verify_proof(
        &self,
        verification_key: &[u8],
        proof: &[u8],
        public_inputs: &[U256],
        gas_limit: u64,
    ) -> Result<bool, OracleError>;

    /// Estimate the gas cost of the verification call.
    async fn estimate_gas(
        &self,
        verification_key: &[u8],
        proof: &[u8],
        public_inputs: &[U256],
    ) -> Result<u64, OracleError>;

    /// Address of the upstream trusted verifier this oracle delegates to.
    async fn gateway(&self) -> Result<Address, OracleError>;
}

/// Persisted idempotent-verification ledger.
///
/// An append-only set: a document, once verified, stays verified.
/// `mark_*` operations are atomic check-and-set so concurrent records
/// sharing a commitment never double-count.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VerificationLedger: Send + Sync {
    /// Whether this document commitment has already been verified.
    async fn is_verified(&self, document_commitment: &Hash256) -> Result<bool, LedgerError>;

    /// Mark a document commitment verified. Returns true when this call
    /// inserted it, false when it was already present.
    async fn mark_verified(&self, document_commitment: &Hash256) -> Result<bool, LedgerError>;

    /// Whether this public key hash has already been seen on a verified
    /// document.
    async fn is_key_verified(&self, public_key_hash: &Hash256) -> Result<bool, LedgerError>;

    /// Mark a public key hash verified. Same check-and-set semantics as
    /// [`mark_verified`](Self::mark_verified).
    async fn mark_key_verified(&self, public_key_hash: &Hash256) -> Result<bool, LedgerError>;
}

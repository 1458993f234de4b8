//! Verification client
//!
//! Wraps the verifier oracle: prepares arguments, estimates gas,
//! issues exactly one bounded verification call per invocation, and
//! classifies the outcome into a tri-state verdict. Retry policy, if
//! any, belongs to the orchestrator - a call here is atomic and
//! reported as-is.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::domain::VerificationVerdict;
use crate::infra::{EstimationError, OracleError, VerificationError, VerifierOracle};

/// Verification client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gas ceiling applied when the caller supplies none
    pub default_gas_limit: u64,
    /// Deadline for the oracle call; an elapsed deadline resolves to an
    /// indeterminate verdict with a timeout reason
    pub call_deadline: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_gas_limit: 500_000,
            call_deadline: Duration::from_secs(30),
        }
    }
}

/// Client over a verifier oracle.
pub struct VerificationClient {
    oracle: Arc<dyn VerifierOracle>,
    config: ClientConfig,
}

impl VerificationClient {
    pub fn new(oracle: Arc<dyn VerifierOracle>, config: ClientConfig) -> Self {
        Self { oracle, config }
    }

    /// Best-effort gas estimation. A failure here is never fatal to the
    /// pipeline; the caller records it and verification proceeds with a
    /// default ceiling. Bounded by the call deadline like every other
    /// oracle interaction; an elapsed deadline is an estimation failure,
    /// never a hang.
    #[instrument(skip_all, fields(inputs = words.len()))]
    pub async fn estimate(
        &self,
        verification_key: &[u8],
        proof: &[u8],
        words: &[U256],
    ) -> Result<u64, EstimationError> {
        let call = self.oracle.estimate_gas(verification_key, proof, words);
        let estimate = match timeout(self.config.call_deadline, call).await {
            Ok(result) => result.map_err(|e| match e {
                OracleError::Network(msg) => EstimationError::Network(msg),
                OracleError::OutOfGas => EstimationError::ResourceExceeded,
                OracleError::Unsupported(msg) => EstimationError::Unsupported(msg),
                other => EstimationError::Unsupported(other.to_string()),
            })?,
            Err(_) => {
                warn!(deadline = ?self.config.call_deadline, "estimation timed out");
                return Err(EstimationError::Network(
                    "estimation deadline elapsed".to_string(),
                ));
            }
        };

        debug!(estimate, "gas estimated");
        Ok(estimate)
    }

    /// Issue exactly one verification call and classify the outcome.
    ///
    /// The oracle's boolean maps to valid/invalid; any transport or
    /// execution failure maps to indeterminate with the cause category.
    /// The call never hangs past the configured deadline.
    #[instrument(skip_all, fields(inputs = words.len()))]
    pub async fn verify(
        &self,
        verification_key: &[u8],
        proof: &[u8],
        words: &[U256],
        gas_limit: Option<u64>,
        gas_estimate: Option<u64>,
    ) -> VerificationVerdict {
        let limit = gas_limit.unwrap_or(self.config.default_gas_limit);

        let call = self.oracle.verify_proof(verification_key, proof, words, limit);
        match timeout(self.config.call_deadline, call).await {
            Ok(Ok(true)) => VerificationVerdict::valid(gas_estimate),
            Ok(Ok(false)) => {
                VerificationVerdict::invalid(gas_estimate, VerificationError::OracleRejected)
            }
            Ok(Err(err)) => {
                warn!(%err, "oracle call failed");
                VerificationVerdict::indeterminate(gas_estimate, Self::classify(err))
            }
            Err(_) => {
                warn!(deadline = ?self.config.call_deadline, "oracle call timed out");
                VerificationVerdict::indeterminate(gas_estimate, VerificationError::Timeout)
            }
        }
    }

    /// Address of the upstream trusted verifier the oracle delegates to.
    pub async fn gateway_address(&self) -> Result<Address, OracleError> {
        self.oracle.gateway().await
    }

    fn classify(err: OracleError) -> VerificationError {
        match err {
            OracleError::Network(msg) => VerificationError::Network(msg),
            OracleError::InvalidInput(msg) => VerificationError::MalformedInput(msg),
            OracleError::Reverted(_) => VerificationError::OracleRejected,
            OracleError::OutOfGas => VerificationError::ResourceExceeded,
            // Not an input problem; the oracle itself cannot serve the
            // call, which is a transport-category failure to the caller.
            OracleError::Unsupported(msg) => VerificationError::Network(msg),
        }
    }
}

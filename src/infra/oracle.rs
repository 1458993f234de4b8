//! On-chain verifier oracle
//!
//! Talks to the document verifier contract over JSON-RPC. The contract
//! is a thin pass-through to the upstream SP1 verifier gateway, which
//! `verifier()` exposes for auditability.

use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::sol;
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::infra::{OracleError, VerifierOracle};

// Generate contract bindings
sol! {
    #[sol(rpc)]
    interface IDocumentVerifier {
        function verifyDocumentProof(
            bytes programVKey,
            bytes proofBytes,
            uint256[] publicInputs
        ) external view returns (bool);

        function verifier() external view returns (address);
    }
}

/// Oracle RPC configuration
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// RPC URL for the chain hosting the verifier contract
    pub rpc_url: String,
    /// Document verifier contract address
    pub verifier_address: Address,
}

impl OracleConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Option<Self> {
        let rpc_url = std::env::var("VERIFIER_RPC_URL").ok()?;
        let verifier_address = std::env::var("VERIFIER_CONTRACT_ADDRESS")
            .ok()
            .and_then(|s| s.parse().ok())?;

        Some(Self {
            rpc_url,
            verifier_address,
        })
    }
}

/// JSON-RPC backed verifier oracle
pub struct OnChainVerifierOracle {
    config: OracleConfig,
}

impl OnChainVerifierOracle {
    pub fn new(config: OracleConfig) -> Self {
        Self { config }
    }

    fn provider(&self) -> Result<impl Provider + Clone, OracleError> {
        let url = self
            .config
            .rpc_url
            .parse()
            .map_err(|e| OracleError::InvalidInput(format!("invalid RPC URL: {e}")))?;
        Ok(ProviderBuilder::new().connect_http(url))
    }

    fn classify(err: alloy::contract::Error) -> OracleError {
        match err {
            alloy::contract::Error::TransportError(e) => {
                let message = e.to_string();
                if message.contains("out of gas") {
                    OracleError::OutOfGas
                } else if message.contains("revert") {
                    OracleError::Reverted(message)
                } else {
                    OracleError::Network(message)
                }
            }
            other => OracleError::InvalidInput(other.to_string()),
        }
    }
}

#[async_trait]
impl VerifierOracle for OnChainVerifierOracle {
    #[instrument(skip_all, fields(inputs = public_inputs.len(), gas_limit))]
    async fn verify_proof(
        &self,
        verification_key: &[u8],
        proof: &[u8],
        public_inputs: &[U256],
        gas_limit: u64,
    ) -> Result<bool, OracleError> {
        let provider = self.provider()?;
        let contract = IDocumentVerifier::new(self.config.verifier_address, &provider);

        let valid = contract
            .verifyDocumentProof(
                Bytes::copy_from_slice(verification_key),
                Bytes::copy_from_slice(proof),
                public_inputs.to_vec(),
            )
            .gas(gas_limit)
            .call()
            .await
            .map_err(Self::classify)?;

        debug!(valid, "oracle answered");
        Ok(valid)
    }

    async fn estimate_gas(
        &self,
        verification_key: &[u8],
        proof: &[u8],
        public_inputs: &[U256],
    ) -> Result<u64, OracleError> {
        let provider = self.provider()?;
        let contract = IDocumentVerifier::new(self.config.verifier_address, &provider);

        contract
            .verifyDocumentProof(
                Bytes::copy_from_slice(verification_key),
                Bytes::copy_from_slice(proof),
                public_inputs.to_vec(),
            )
            .estimate_gas()
            .await
            .map_err(Self::classify)
    }

    async fn gateway(&self) -> Result<Address, OracleError> {
        let provider = self.provider()?;
        let contract = IDocumentVerifier::new(self.config.verifier_address, &provider);

        contract.verifier().call().await.map_err(Self::classify)
    }
}

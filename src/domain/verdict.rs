//! Verification verdict types

use serde::{Deserialize, Serialize};

use crate::infra::VerificationError;

/// Tri-state outcome of a verification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// Oracle accepted the proof
    Valid,
    /// Oracle answered, and the answer was no
    Invalid,
    /// The call failed before producing a boolean
    Indeterminate,
}

/// Outcome of one verification attempt. Created once per attempt and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    /// Tri-state outcome
    pub is_valid: Validity,

    /// Gas estimate for the call; absent when estimation itself failed
    pub gas_estimate: Option<u64>,

    /// Structured cause when `is_valid` is not `Valid`
    pub failure_reason: Option<VerificationError>,
}

impl VerificationVerdict {
    pub fn valid(gas_estimate: Option<u64>) -> Self {
        Self {
            is_valid: Validity::Valid,
            gas_estimate,
            failure_reason: None,
        }
    }

    pub fn invalid(gas_estimate: Option<u64>, reason: VerificationError) -> Self {
        Self {
            is_valid: Validity::Invalid,
            gas_estimate,
            failure_reason: Some(reason),
        }
    }

    pub fn indeterminate(gas_estimate: Option<u64>, reason: VerificationError) -> Self {
        Self {
            is_valid: Validity::Indeterminate,
            gas_estimate,
            failure_reason: Some(reason),
        }
    }

    /// Whether the oracle accepted the proof.
    pub fn accepted(&self) -> bool {
        self.is_valid == Validity::Valid
    }
}

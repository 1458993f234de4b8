//! Proof record artifact types

use serde::{Deserialize, Serialize};

use crate::infra::RecordError;

/// Input artifact for one verification run.
///
/// Invariant: all three fields are present and non-empty. A record that
/// fails this never reaches the verification pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRecord {
    /// Identifies the program whose execution the proof attests to
    pub verification_key: Vec<u8>,

    /// Opaque cryptographic proof payload
    pub proof_bytes: Vec<u8>,

    /// Packed encoding of the attested public outputs
    pub public_values: Vec<u8>,
}

impl ProofRecord {
    /// Build a record, enforcing the non-empty invariant on every field.
    pub fn new(
        verification_key: Vec<u8>,
        proof_bytes: Vec<u8>,
        public_values: Vec<u8>,
    ) -> Result<Self, RecordError> {
        if verification_key.is_empty() {
            return Err(RecordError::EmptyField("vkey"));
        }
        if proof_bytes.is_empty() {
            return Err(RecordError::EmptyField("proof"));
        }
        if public_values.is_empty() {
            return Err(RecordError::EmptyField("publicValues"));
        }
        Ok(Self {
            verification_key,
            proof_bytes,
            public_values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_proof() {
        let err = ProofRecord::new(vec![1], vec![], vec![3]).unwrap_err();
        assert!(matches!(err, RecordError::EmptyField("proof")));
    }

    #[test]
    fn accepts_populated_record() {
        let record = ProofRecord::new(vec![1], vec![2], vec![3]).unwrap();
        assert_eq!(record.proof_bytes, vec![2]);
    }
}

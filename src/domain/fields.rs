//! Decoded public-value field types

use serde::{Deserialize, Serialize};

use super::Hash256;
use crate::infra::CodecError;

/// Typed public values attested to by a document proof.
///
/// Structural decodes populate all five attested fields; heuristic
/// recovery populates only the two string fields and sets
/// `manually_parsed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFields {
    /// Fixed-form GST tax identifier (e.g. "07AAATC0869P1ZB")
    pub gst_number: String,

    /// Legal entity name on the certificate
    pub legal_name: String,

    /// Whether the document's digital signature verified inside the circuit
    pub signature_valid: bool,

    /// 32-byte hash binding the result to the source document
    pub document_commitment: Hash256,

    /// 32-byte hash of the issuer's signing key
    pub public_key_hash: Hash256,

    /// True when produced by the fallback pattern scan rather than the
    /// structural decode
    pub manually_parsed: bool,
}

impl DecodedFields {
    /// Whether the record carries a usable document commitment.
    pub fn has_commitment(&self) -> bool {
        self.document_commitment != [0u8; 32]
    }

    /// Whether the record carries a usable public key hash.
    pub fn has_public_key_hash(&self) -> bool {
        self.public_key_hash != [0u8; 32]
    }
}

/// Tagged result of a decode attempt. The success arms carry their
/// provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum DecodeOutcome {
    /// Primary ABI-layout decode succeeded; all fields populated
    Structural(DecodedFields),
    /// Fallback pattern scan recovered the two string fields
    Heuristic(DecodedFields),
    /// Neither path produced fields; verification proceeds on raw words
    Failed { reason: CodecError },
}

impl DecodeOutcome {
    /// The decoded fields, when either path succeeded.
    pub fn fields(&self) -> Option<&DecodedFields> {
        match self {
            DecodeOutcome::Structural(f) | DecodeOutcome::Heuristic(f) => Some(f),
            DecodeOutcome::Failed { .. } => None,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, DecodeOutcome::Structural(_))
    }
}

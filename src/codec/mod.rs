//! Public-values codec
//!
//! Encodes and decodes the packed public-values blob committed by the
//! zkVM program. The primary path interprets the blob as the Solidity
//! ABI encoding of the attested struct; when that fails, a heuristic
//! byte-pattern scan recovers what it can. Decoding is advisory for
//! display purposes only - the cryptographic check always proceeds on
//! the raw 32-byte words.

mod diagnostics;
mod heuristic;

pub use diagnostics::{CodecDiagnostics, WordClass, WordKind};
pub use heuristic::HeuristicPatterns;

use alloy::primitives::{Bytes, FixedBytes, U256};
use alloy::sol;
use alloy::sol_types::SolValue;
use tracing::debug;

use crate::domain::{DecodeOutcome, DecodedFields};
use crate::infra::CodecError;

/// Width of one public-values word
pub const WORD_WIDTH: usize = 32;

sol! {
    /// The public values committed by the zkVM program, as decoded
    /// inside the verifier contract.
    struct PublicValues {
        string gst_number;
        string legal_name;
        bool signature_valid;
        bytes32 document_commitment;
        bytes32 public_key_hash;
    }

    /// Byte-typed twin of [`PublicValues`]. `bytes` and `string` share
    /// an ABI layout, so a successful decode here with a failed UTF-8
    /// conversion pins the failure on the string payload rather than
    /// the structure.
    struct RawPublicValues {
        bytes gst_number;
        bytes legal_name;
        bool signature_valid;
        bytes32 document_commitment;
        bytes32 public_key_hash;
    }
}

/// Two-path public-values codec.
#[derive(Debug, Clone, Default)]
pub struct Codec {
    patterns: HeuristicPatterns,
}

impl Codec {
    pub fn new(patterns: HeuristicPatterns) -> Self {
        Self { patterns }
    }

    /// Decode a public-values blob.
    ///
    /// Returns the tagged decode outcome, the raw 32-byte words the
    /// verification call consumes, and the diagnostic scan. The words
    /// and diagnostics are produced regardless of decode success.
    pub fn decode(&self, public_values: &[u8]) -> (DecodeOutcome, Vec<U256>, CodecDiagnostics) {
        let words = chunk_words(public_values);
        let mut diagnostics = diagnostics::scan(public_values);

        let outcome = match self.decode_structural(public_values) {
            Ok(fields) => DecodeOutcome::Structural(fields),
            Err(primary) => {
                debug!(%primary, "structural decode failed, trying pattern scan");
                diagnostics
                    .warnings
                    .push(format!("structural decode failed: {primary}"));
                match self.patterns.scan(public_values) {
                    Some(fields) => DecodeOutcome::Heuristic(fields),
                    // MalformedString is a primary-path failure; once the
                    // scan also fails the blob is undecodable as a whole.
                    None => DecodeOutcome::Failed {
                        reason: CodecError::Undecodable,
                    },
                }
            }
        };

        (outcome, words, diagnostics)
    }

    /// Structural inverse of the primary decode path.
    pub fn encode(&self, fields: &DecodedFields) -> Vec<u8> {
        PublicValues {
            gst_number: fields.gst_number.clone(),
            legal_name: fields.legal_name.clone(),
            signature_valid: fields.signature_valid,
            document_commitment: FixedBytes::from(fields.document_commitment),
            public_key_hash: FixedBytes::from(fields.public_key_hash),
        }
        .abi_encode()
    }

    /// Primary path: ABI structural decode.
    ///
    /// A blob whose outer offsets or lengths do not hold together fails
    /// with `Undecodable`; one that holds together but carries invalid
    /// UTF-8 in a string slot fails with `MalformedString`.
    fn decode_structural(&self, public_values: &[u8]) -> Result<DecodedFields, CodecError> {
        let raw =
            RawPublicValues::abi_decode(public_values).map_err(|_| CodecError::Undecodable)?;

        let gst_number = utf8_field(&raw.gst_number)?;
        let legal_name = utf8_field(&raw.legal_name)?;

        Ok(DecodedFields {
            gst_number,
            legal_name,
            signature_valid: raw.signature_valid,
            document_commitment: raw.document_commitment.0,
            public_key_hash: raw.public_key_hash.0,
            manually_parsed: false,
        })
    }
}

fn utf8_field(bytes: &Bytes) -> Result<String, CodecError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::MalformedString)
}

/// Split a blob into consecutive non-overlapping 32-byte big-endian
/// words. A trailing partial word is dropped (documented truncation;
/// the diagnostic scan surfaces it as a warning).
pub fn chunk_words(blob: &[u8]) -> Vec<U256> {
    blob.chunks_exact(WORD_WIDTH)
        .map(U256::from_be_slice)
        .collect()
}

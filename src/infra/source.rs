//! Proof record source parsing
//!
//! Proof records arrive as JSON fixture objects emitted by the proving
//! toolchain: `proof`, `publicValues`, and `vkey` as hex strings with
//! an optional `0x` prefix. All three must be present before a record
//! is constructed.

use serde_json::Value;

use crate::domain::ProofRecord;
use crate::infra::RecordError;

/// Parse a proof record from its JSON source object.
///
/// Field aliases: `vkey` is also accepted as `verificationKey` (both
/// spellings occur across fixture revisions).
pub fn parse_record(source: &Value) -> Result<ProofRecord, RecordError> {
    let proof = hex_field(source, "proof", &["proof"])?;
    let public_values = hex_field(source, "publicValues", &["publicValues"])?;
    let verification_key = hex_field(source, "vkey", &["vkey", "verificationKey"])?;

    ProofRecord::new(verification_key, proof, public_values)
}

fn hex_field(
    source: &Value,
    name: &'static str,
    aliases: &[&str],
) -> Result<Vec<u8>, RecordError> {
    let raw = aliases
        .iter()
        .find_map(|alias| source.get(alias))
        .ok_or(RecordError::MissingField(name))?;

    let text = raw.as_str().ok_or(RecordError::InvalidHex(name))?;
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text).map_err(|_| RecordError::InvalidHex(name))
}

//! Error types for the zkdoc verifier

use thiserror::Error;

/// Errors from the public-values codec.
///
/// Codec errors are always recovered locally (fallback scan, then an
/// empty-fields report); they never abort the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CodecError {
    /// Blob is structurally sound but a string payload is not valid UTF-8
    #[error("malformed string payload in public values")]
    MalformedString,

    /// Neither the structural decode nor the pattern scan produced fields
    #[error("public values could not be decoded by any path")]
    Undecodable,
}

/// Errors from the best-effort gas estimation step.
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EstimationError {
    /// Transport failure reaching the oracle
    #[error("estimation transport failure: {0}")]
    Network(String),

    /// Estimation exceeded the configured resource ceiling
    #[error("estimation exceeded the resource ceiling")]
    ResourceExceeded,

    /// Oracle does not support estimation for this call
    #[error("estimation unsupported: {0}")]
    Unsupported(String),
}

/// Failure causes for the verification call itself.
///
/// This is the only error class that determines the terminal verdict;
/// it is always surfaced in the report's `failure_reason`.
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VerificationError {
    /// Oracle answered and rejected the proof
    #[error("verifier oracle rejected the proof")]
    OracleRejected,

    /// Transport failure before a boolean was produced
    #[error("verification transport failure: {0}")]
    Network(String),

    /// Oracle could not interpret the call arguments
    #[error("malformed verification input: {0}")]
    MalformedInput(String),

    /// Execution exceeded the supplied resource ceiling
    #[error("verification call exceeded the gas allowance")]
    ResourceExceeded,

    /// The caller deadline elapsed before the oracle answered
    #[error("verification call timed out")]
    Timeout,
}

/// Errors constructing a proof record from its source object.
///
/// A record error aborts processing before any decode or verify
/// attempt; no partial report is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required field is absent from the source object
    #[error("proof record missing field: {0}")]
    MissingField(&'static str),

    /// A required field is present but empty
    #[error("proof record field is empty: {0}")]
    EmptyField(&'static str),

    /// A field's hex payload could not be decoded
    #[error("proof record field is not valid hex: {0}")]
    InvalidHex(&'static str),
}

/// Transport-level failures reported by a verifier oracle
/// implementation, classified by the verification client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// Connectivity or RPC transport failure
    #[error("oracle transport failure: {0}")]
    Network(String),

    /// The oracle could not decode the call
    #[error("oracle rejected the call input: {0}")]
    InvalidInput(String),

    /// The call executed and reverted
    #[error("oracle execution reverted: {0}")]
    Reverted(String),

    /// Execution ran out of the supplied gas allowance
    #[error("oracle execution exceeded the gas allowance")]
    OutOfGas,

    /// The operation is not supported by this oracle
    #[error("oracle operation unsupported: {0}")]
    Unsupported(String),
}

/// Errors from the persisted verification ledger.
///
/// Ledger failures are advisory: the idempotence guard is skipped and
/// the pipeline proceeds to a real oracle call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Underlying storage failure
    #[error("ledger storage failure: {0}")]
    Storage(String),
}

/// Umbrella error for callers that do not need the class distinction.
#[derive(Error, Debug)]
pub enum VerifierError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Estimation(#[from] EstimationError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result type for verifier operations
pub type Result<T> = std::result::Result<T, VerifierError>;

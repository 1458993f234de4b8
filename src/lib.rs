//! zkdoc Verifier Library
//!
//! Public-values decoding and on-chain verification orchestration for
//! zkPDF document attestations (GST certificates proven inside a zkVM).
//!
//! ## Modules
//!
//! - [`domain`] - Core domain types (proof records, decoded fields, verdicts)
//! - [`codec`] - Public-values blob encoding/decoding and word chunking
//! - [`infra`] - Infrastructure (verifier oracle, ledger, client, orchestrator)
//! - [`telemetry`] - Structured logging setup

pub mod codec;
pub mod domain;
pub mod infra;
pub mod telemetry;

// Re-export commonly used types
pub use domain::{
    DecodeOutcome, DecodedFields, Hash256, PipelineStage, ProofRecord, Report, StageTimings,
    Validity, VerificationVerdict,
};

pub use codec::{Codec, CodecDiagnostics, HeuristicPatterns, WordClass, WordKind};

pub use infra::{
    parse_record, ClientConfig, CodecError, EstimationError, InMemoryLedger, LedgerError,
    OnChainVerifierOracle, OracleConfig, OracleError, Orchestrator, RecordError, Result,
    VerificationClient, VerificationError, VerificationLedger, VerifierError, VerifierOracle,
};

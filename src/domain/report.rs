//! Pipeline report types

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DecodeOutcome, DecodedFields, VerificationVerdict};
use crate::codec::CodecDiagnostics;
use crate::infra::EstimationError;

/// Stages of the per-record pipeline, in the order they can occur.
///
/// `DecodeFailed` and `EstimationFailed` are non-terminal; only the
/// verification call's own outcome selects one of the three terminal
/// stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Loaded,
    Decoded,
    DecodeFailed,
    Estimated,
    EstimationFailed,
    /// Terminal: oracle accepted the proof
    Verified,
    /// Terminal: oracle rejected the proof
    Rejected,
    /// Terminal: the call never produced a boolean
    Errored,
}

/// Wall-clock time spent in each pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimings {
    pub decode: Duration,
    pub estimate: Duration,
    pub verify: Duration,
}

/// Final, immutable result of processing one proof record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier
    pub report_id: Uuid,

    /// When processing started
    pub started_at: DateTime<Utc>,

    /// Decoded public values, when either decode path succeeded
    pub decoded: Option<DecodedFields>,

    /// Which decode path produced (or failed to produce) the fields
    pub outcome: DecodeOutcome,

    /// Verdict of the verification attempt
    pub verdict: VerificationVerdict,

    /// Cause of gas-estimation failure, when estimation failed
    pub estimation_error: Option<EstimationError>,

    /// Observability output from the codec scan
    pub diagnostics: CodecDiagnostics,

    /// Per-stage durations
    pub timing: StageTimings,

    /// Ordered trace of the stages this record passed through
    pub stages: Vec<PipelineStage>,

    /// True when the idempotence guard answered without an oracle call
    pub short_circuited: bool,
}

impl Report {
    /// The terminal stage implied by the verdict.
    pub fn terminal_stage(&self) -> PipelineStage {
        match self.verdict.is_valid {
            super::Validity::Valid => PipelineStage::Verified,
            super::Validity::Invalid => PipelineStage::Rejected,
            super::Validity::Indeterminate => PipelineStage::Errored,
        }
    }
}

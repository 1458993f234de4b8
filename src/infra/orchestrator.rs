//! Verification orchestrator
//!
//! Sequences codec and verification client over one proof record:
//! decode, estimate, verify, aggregate diagnostics into an immutable
//! report. Decode and estimation failures never halt the pipeline;
//! only the verification call's own outcome selects the terminal
//! stage.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::codec::Codec;
use crate::domain::{
    PipelineStage, ProofRecord, Report, StageTimings, Validity, VerificationVerdict,
};
use crate::infra::{
    parse_record, InMemoryLedger, RecordError, VerificationClient, VerificationLedger,
};

/// Per-record verification pipeline.
pub struct Orchestrator {
    codec: Codec,
    client: VerificationClient,
    ledger: Arc<dyn VerificationLedger>,
    idempotence_enabled: bool,
    gas_limit: Option<u64>,
}

impl Orchestrator {
    /// Build an orchestrator with a default codec and an in-memory
    /// ledger. Instances sharing a ledger may run concurrently; the
    /// ledger's check-and-set keeps duplicate commitments single-count.
    pub fn new(client: VerificationClient) -> Self {
        Self {
            codec: Codec::default(),
            client,
            ledger: Arc::new(InMemoryLedger::new()),
            idempotence_enabled: true,
            gas_limit: None,
        }
    }

    pub fn with_codec(mut self, codec: Codec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_ledger(mut self, ledger: Arc<dyn VerificationLedger>) -> Self {
        self.ledger = ledger;
        self
    }

    /// Enable or disable the idempotence guard (and the ledger writes
    /// that feed it). Disabled, every record reaches the oracle.
    pub fn with_idempotence(mut self, enabled: bool) -> Self {
        self.idempotence_enabled = enabled;
        self
    }

    /// Caller-supplied gas ceiling for verification calls.
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Parse a record from its JSON source object and process it.
    ///
    /// A record error aborts before any decode or verify attempt; no
    /// partial report is produced.
    pub async fn process_source(&self, source: &Value) -> Result<Report, RecordError> {
        let record = parse_record(source)?;
        Ok(self.process(record).await)
    }

    /// Run the pipeline over one proof record.
    #[instrument(skip_all, fields(public_values_len = record.public_values.len()))]
    pub async fn process(&self, record: ProofRecord) -> Report {
        let report_id = Uuid::new_v4();
        let started_at = Utc::now();
        let mut stages = vec![PipelineStage::Loaded];
        let mut timing = StageTimings::default();

        // Decode is advisory: failure continues with empty fields.
        let decode_started = Instant::now();
        let (outcome, words, diagnostics) = self.codec.decode(&record.public_values);
        timing.decode = decode_started.elapsed();

        let decoded = outcome.fields().cloned();
        if decoded.is_some() {
            stages.push(PipelineStage::Decoded);
        } else {
            warn!(report_id = %report_id, "decode failed on both paths, verifying raw words");
            stages.push(PipelineStage::DecodeFailed);
        }

        // Idempotence guard: an already-verified commitment skips the
        // oracle. Optimization only - ledger trouble falls through to a
        // real call.
        if let Some(commitment) = self.guard_commitment(&decoded) {
            match self.ledger.is_verified(&commitment).await {
                Ok(true) => {
                    info!(report_id = %report_id, "commitment already verified, short-circuiting");
                    stages.push(PipelineStage::Verified);
                    return Report {
                        report_id,
                        started_at,
                        decoded,
                        outcome,
                        verdict: VerificationVerdict::valid(None),
                        estimation_error: None,
                        diagnostics,
                        timing,
                        stages,
                        short_circuited: true,
                    };
                }
                Ok(false) => {}
                Err(err) => warn!(report_id = %report_id, %err, "ledger lookup failed, guard skipped"),
            }
        }

        // Estimation is best-effort.
        let estimate_started = Instant::now();
        let (gas_estimate, estimation_error) = match self
            .client
            .estimate(&record.verification_key, &record.proof_bytes, &words)
            .await
        {
            Ok(gas) => {
                stages.push(PipelineStage::Estimated);
                (Some(gas), None)
            }
            Err(err) => {
                warn!(report_id = %report_id, %err, "gas estimation failed, using default ceiling");
                stages.push(PipelineStage::EstimationFailed);
                (None, Some(err))
            }
        };
        timing.estimate = estimate_started.elapsed();

        let verify_started = Instant::now();
        let verdict = self
            .client
            .verify(
                &record.verification_key,
                &record.proof_bytes,
                &words,
                self.gas_limit,
                gas_estimate,
            )
            .await;
        timing.verify = verify_started.elapsed();

        match verdict.is_valid {
            Validity::Valid => stages.push(PipelineStage::Verified),
            Validity::Invalid => stages.push(PipelineStage::Rejected),
            Validity::Indeterminate => stages.push(PipelineStage::Errored),
        }

        if verdict.accepted() {
            self.record_verified(&decoded).await;
        }

        debug!(
            report_id = %report_id,
            verdict = ?verdict.is_valid,
            short_circuited = false,
            "pipeline finished"
        );

        Report {
            report_id,
            started_at,
            decoded,
            outcome,
            verdict,
            estimation_error,
            diagnostics,
            timing,
            stages,
            short_circuited: false,
        }
    }

    /// Commitment to consult the guard with, when the guard applies.
    fn guard_commitment(
        &self,
        decoded: &Option<crate::domain::DecodedFields>,
    ) -> Option<crate::domain::Hash256> {
        if !self.idempotence_enabled {
            return None;
        }
        decoded
            .as_ref()
            .filter(|f| f.has_commitment())
            .map(|f| f.document_commitment)
    }

    /// Mark a successful verification in the ledger.
    async fn record_verified(&self, decoded: &Option<crate::domain::DecodedFields>) {
        if !self.idempotence_enabled {
            return;
        }
        let Some(fields) = decoded else { return };

        if fields.has_commitment() {
            if let Err(err) = self.ledger.mark_verified(&fields.document_commitment).await {
                warn!(%err, "failed to record verified commitment");
            }
        }
        if fields.has_public_key_hash() {
            if let Err(err) = self.ledger.mark_key_verified(&fields.public_key_hash).await {
                warn!(%err, "failed to record verified key hash");
            }
        }
    }
}

//! End-to-end pipeline tests.
//!
//! Drives the orchestrator with scripted fake oracles over real
//! encoded fixtures: terminal verdicts, idempotence across shared
//! ledgers, record-source failures, and report shape.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy::primitives::{keccak256, Address, U256};
use async_trait::async_trait;
use serde_json::json;

use zkdoc_verifier::{
    Codec, DecodedFields, InMemoryLedger, OracleError, Orchestrator, PipelineStage, ProofRecord,
    RecordError, Validity, VerificationClient, VerificationError, VerificationLedger,
    VerifierOracle,
};

/// Scripted oracle that counts verification calls.
struct ScriptedOracle {
    answer: Result<bool, OracleError>,
    calls: AtomicUsize,
}

impl ScriptedOracle {
    fn answering(answer: Result<bool, OracleError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerifierOracle for ScriptedOracle {
    async fn verify_proof(
        &self,
        _verification_key: &[u8],
        _proof: &[u8],
        _public_inputs: &[U256],
        _gas_limit: u64,
    ) -> Result<bool, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }

    async fn estimate_gas(
        &self,
        _verification_key: &[u8],
        _proof: &[u8],
        _public_inputs: &[U256],
    ) -> Result<u64, OracleError> {
        Ok(275_000)
    }

    async fn gateway(&self) -> Result<Address, OracleError> {
        Ok(Address::repeat_byte(0x51))
    }
}

fn sample_fields() -> DecodedFields {
    let gst_number = "07AAATC0869P1ZB".to_string();
    let legal_name = "CONSUMER UNITY AND TRUST SOCIETY".to_string();
    let issuer_key = [0x22u8; 64];

    // Commitment shape matches the proving program: keccak over the
    // signed digest, the extracted strings, and the issuer key.
    let mut preimage = Vec::new();
    preimage.extend_from_slice(&[0x07u8; 32]);
    preimage.extend_from_slice(gst_number.as_bytes());
    preimage.extend_from_slice(legal_name.as_bytes());
    preimage.extend_from_slice(&issuer_key);

    DecodedFields {
        gst_number,
        legal_name,
        signature_valid: true,
        document_commitment: keccak256(&preimage).0,
        public_key_hash: keccak256(issuer_key).0,
        manually_parsed: false,
    }
}

fn sample_record() -> ProofRecord {
    let public_values = Codec::default().encode(&sample_fields());
    ProofRecord::new(vec![0xaa; 32], vec![0xbb; 260], public_values).unwrap()
}

fn orchestrator_over(oracle: Arc<ScriptedOracle>) -> Orchestrator {
    Orchestrator::new(VerificationClient::new(oracle, Default::default()))
}

#[tokio::test]
async fn accepted_proof_produces_a_full_report() {
    let oracle = ScriptedOracle::answering(Ok(true));
    let report = orchestrator_over(Arc::clone(&oracle))
        .process(sample_record())
        .await;

    assert_eq!(report.verdict.is_valid, Validity::Valid);
    assert_eq!(report.verdict.gas_estimate, Some(275_000));
    assert_eq!(report.verdict.failure_reason, None);
    assert_eq!(report.terminal_stage(), PipelineStage::Verified);
    assert!(!report.short_circuited);

    let decoded = report.decoded.expect("structural decode");
    assert_eq!(decoded.gst_number, "07AAATC0869P1ZB");
    assert!(!decoded.manually_parsed);

    // Diagnostics cover every whole word of the blob.
    assert_eq!(report.diagnostics.word_count, report.diagnostics.words.len());
    assert_eq!(report.diagnostics.truncated_tail_bytes, 0);
    assert_eq!(oracle.calls(), 1);
}

#[tokio::test]
async fn rejected_proof_reports_oracle_rejection() {
    let oracle = ScriptedOracle::answering(Ok(false));
    let report = orchestrator_over(oracle).process(sample_record()).await;

    assert_eq!(report.verdict.is_valid, Validity::Invalid);
    assert_eq!(
        report.verdict.failure_reason,
        Some(VerificationError::OracleRejected)
    );
    assert_eq!(report.terminal_stage(), PipelineStage::Rejected);
}

#[tokio::test]
async fn transport_failure_reports_indeterminate() {
    let oracle = ScriptedOracle::answering(Err(OracleError::Network("rpc unreachable".into())));
    let report = orchestrator_over(oracle).process(sample_record()).await;

    assert_eq!(report.verdict.is_valid, Validity::Indeterminate);
    assert!(matches!(
        report.verdict.failure_reason,
        Some(VerificationError::Network(_))
    ));
    assert_eq!(report.terminal_stage(), PipelineStage::Errored);
}

#[tokio::test]
async fn orchestrators_sharing_a_ledger_skip_duplicate_work() {
    let oracle = ScriptedOracle::answering(Ok(true));
    let ledger: Arc<dyn VerificationLedger> = Arc::new(InMemoryLedger::new());

    let first = orchestrator_over(Arc::clone(&oracle)).with_ledger(Arc::clone(&ledger));
    let second = orchestrator_over(Arc::clone(&oracle)).with_ledger(ledger);

    let report = first.process(sample_record()).await;
    assert!(!report.short_circuited);

    let report = second.process(sample_record()).await;
    assert!(report.short_circuited);
    assert_eq!(report.verdict.is_valid, Validity::Valid);
    assert_eq!(oracle.calls(), 1);
}

#[tokio::test]
async fn heuristic_record_is_never_short_circuited() {
    // Heuristic recovery leaves the commitment zeroed, so the guard
    // must not fire for it.
    let oracle = ScriptedOracle::answering(Ok(true));
    let orchestrator = orchestrator_over(Arc::clone(&oracle));

    let fields = sample_fields();
    let mut blob = vec![0xffu8; 64];
    blob.extend_from_slice(fields.gst_number.as_bytes());
    blob.extend_from_slice(fields.legal_name.as_bytes());
    let record = ProofRecord::new(vec![1], vec![2], blob).unwrap();

    let first = orchestrator.process(record.clone()).await;
    let decoded = first.decoded.expect("heuristic decode");
    assert!(decoded.manually_parsed);

    let second = orchestrator.process(record).await;
    assert!(!second.short_circuited);
    assert_eq!(oracle.calls(), 2);
}

#[tokio::test]
async fn record_source_flow_end_to_end() {
    let oracle = ScriptedOracle::answering(Ok(true));
    let orchestrator = orchestrator_over(oracle);

    let public_values = Codec::default().encode(&sample_fields());
    let fixture = json!({
        "proof": format!("0x{}", hex::encode([0xbb; 260])),
        "publicValues": format!("0x{}", hex::encode(&public_values)),
        "vkey": format!("0x{}", hex::encode([0xaa; 32])),
    });

    let report = orchestrator.process_source(&fixture).await.unwrap();
    assert_eq!(report.verdict.is_valid, Validity::Valid);
    assert_eq!(
        report.decoded.unwrap().legal_name,
        "CONSUMER UNITY AND TRUST SOCIETY"
    );
}

#[tokio::test]
async fn missing_proof_field_aborts_without_a_report() {
    let oracle = ScriptedOracle::answering(Ok(true));
    let orchestrator = orchestrator_over(Arc::clone(&oracle));

    let fixture = json!({
        "publicValues": "0x01",
        "vkey": "0x02",
    });

    let err = orchestrator.process_source(&fixture).await.unwrap_err();
    assert_eq!(err, RecordError::MissingField("proof"));
    assert_eq!(oracle.calls(), 0);
}

#[tokio::test]
async fn reports_serialize_for_downstream_consumers() {
    let oracle = ScriptedOracle::answering(Ok(true));
    let report = orchestrator_over(oracle).process(sample_record()).await;

    let encoded = serde_json::to_value(&report).unwrap();
    assert_eq!(encoded["verdict"]["is_valid"], "valid");
    assert_eq!(encoded["outcome"]["path"], "structural");
    assert_eq!(encoded["short_circuited"], false);
}

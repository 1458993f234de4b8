//! Infrastructure layer for the zkdoc verifier
//!
//! Contains trait definitions and implementations for:
//! - Verifier oracle (on-chain JSON-RPC)
//! - Verification client (single bounded call, verdict classification)
//! - Verification ledger (idempotent verified set)
//! - Proof record source parsing
//! - Orchestrator (per-record pipeline)

mod client;
mod error;
mod ledger;
mod oracle;
mod orchestrator;
mod source;
mod traits;


pub use client::{ClientConfig, VerificationClient};
pub use error::*;
pub use ledger::InMemoryLedger;
pub use oracle::{OnChainVerifierOracle, OracleConfig};
pub use orchestrator::Orchestrator;
pub use source::parse_record;
pub use traits::*;

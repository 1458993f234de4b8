//! Domain models for the zkdoc verifier
//!
//! Core types for proof records, decoded public values, verdicts, and
//! pipeline reports.

mod fields;
mod record;
mod report;
mod verdict;

pub use fields::*;
pub use record::*;
pub use report::*;
pub use verdict::*;

/// 32-byte hash (keccak256 on the ABI side)
pub type Hash256 = [u8; 32];

//! Fallback pattern-scan decode
//!
//! The structural decode assumes the blob is a well-formed ABI record.
//! Production samples have not always honored that assumption, so the
//! fallback locates known byte subsequences by exact match and rebuilds
//! a partial record from whatever it finds.

use serde::{Deserialize, Serialize};

use crate::domain::DecodedFields;

/// Default tax-identifier pattern, from the observed production sample.
const DEFAULT_GST_PATTERN: &[u8] = b"07AAATC0869P1ZB";

/// Default legal-name pattern, from the observed production sample.
const DEFAULT_LEGAL_NAME_PATTERN: &[u8] = b"CONSUMER UNITY AND TRUST SOCIETY";

/// Byte subsequences the fallback scan looks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicPatterns {
    /// Exact bytes of the expected GST tax identifier
    pub gst_number: Vec<u8>,
    /// Exact bytes of the expected legal name
    pub legal_name: Vec<u8>,
}

impl Default for HeuristicPatterns {
    fn default() -> Self {
        Self {
            gst_number: DEFAULT_GST_PATTERN.to_vec(),
            legal_name: DEFAULT_LEGAL_NAME_PATTERN.to_vec(),
        }
    }
}

impl HeuristicPatterns {
    /// Scan a blob for both patterns.
    ///
    /// Both must be present for recovery; a partial hit yields nothing.
    /// The recovered record carries only the two string fields, marked
    /// as manually parsed, with the attested hashes left zeroed.
    pub fn scan(&self, blob: &[u8]) -> Option<DecodedFields> {
        if !contains_subsequence(blob, &self.gst_number)
            || !contains_subsequence(blob, &self.legal_name)
        {
            return None;
        }

        // Exact match: the recovered text is the pattern itself.
        Some(DecodedFields {
            gst_number: String::from_utf8_lossy(&self.gst_number).into_owned(),
            legal_name: String::from_utf8_lossy(&self.legal_name).into_owned(),
            manually_parsed: true,
            ..DecodedFields::default()
        })
    }
}

/// Whether `needle` occurs contiguously in `haystack`. An empty needle
/// never matches.
fn contains_subsequence(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_both_patterns() {
        let patterns = HeuristicPatterns::default();
        let mut blob = b"prefix 07AAATC0869P1ZB middle ".to_vec();
        blob.extend_from_slice(b"CONSUMER UNITY AND TRUST SOCIETY suffix");

        let fields = patterns.scan(&blob).expect("both patterns present");
        assert!(fields.manually_parsed);
        assert_eq!(fields.gst_number, "07AAATC0869P1ZB");
        assert_eq!(fields.legal_name, "CONSUMER UNITY AND TRUST SOCIETY");
    }

    #[test]
    fn partial_hit_yields_nothing() {
        let patterns = HeuristicPatterns::default();
        assert!(patterns.scan(b"only 07AAATC0869P1ZB here").is_none());
    }

    #[test]
    fn custom_patterns() {
        let patterns = HeuristicPatterns {
            gst_number: b"29ZZZZZ9999Z9Z9".to_vec(),
            legal_name: b"ACME".to_vec(),
        };
        let fields = patterns.scan(b"::29ZZZZZ9999Z9Z9::ACME::").unwrap();
        assert_eq!(fields.legal_name, "ACME");
    }

    #[test]
    fn empty_needle_never_matches() {
        let patterns = HeuristicPatterns {
            gst_number: vec![],
            legal_name: b"ACME".to_vec(),
        };
        assert!(patterns.scan(b"ACME").is_none());
    }
}

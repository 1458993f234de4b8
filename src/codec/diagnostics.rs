//! Diagnostic word scan
//!
//! Classifies each 32-byte word of a public-values blob as
//! printable-text-like or opaque. Observability output only; nothing
//! here influences decode outcomes or verdicts.

use serde::{Deserialize, Serialize};

use super::WORD_WIDTH;

/// Classification of one 32-byte word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordKind {
    /// Non-zero payload is entirely printable ASCII
    Printable,
    /// Anything else (hashes, offsets, lengths, padding)
    Opaque,
}

/// One classified word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordClass {
    /// Word index within the blob
    pub index: usize,
    pub kind: WordKind,
    /// Printable payload, or a hex prefix for opaque words
    pub preview: String,
}

/// Result of the diagnostic scan over a public-values blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecDiagnostics {
    /// Number of whole 32-byte words in the blob
    pub word_count: usize,

    /// Bytes dropped from a trailing partial word
    pub truncated_tail_bytes: usize,

    /// Per-word classification
    pub words: Vec<WordClass>,

    /// Human-readable warnings accumulated during decode
    pub warnings: Vec<String>,
}

/// Scan a blob and classify its words.
pub fn scan(blob: &[u8]) -> CodecDiagnostics {
    let words: Vec<WordClass> = blob
        .chunks_exact(WORD_WIDTH)
        .enumerate()
        .map(|(index, word)| classify_word(index, word))
        .collect();

    let truncated_tail_bytes = blob.len() % WORD_WIDTH;
    let mut warnings = Vec::new();
    if truncated_tail_bytes != 0 {
        warnings.push(format!(
            "public values length {} is not a multiple of {}; {} trailing bytes dropped",
            blob.len(),
            WORD_WIDTH,
            truncated_tail_bytes
        ));
    }

    CodecDiagnostics {
        word_count: words.len(),
        truncated_tail_bytes,
        words,
        warnings,
    }
}

fn classify_word(index: usize, word: &[u8]) -> WordClass {
    // Strip ABI zero padding from both ends before judging the payload.
    let start = word.iter().position(|&b| b != 0);
    let end = word.iter().rposition(|&b| b != 0);

    match (start, end) {
        (Some(start), Some(end)) => {
            let payload = &word[start..=end];
            if payload.iter().all(|&b| (0x20..=0x7e).contains(&b)) {
                WordClass {
                    index,
                    kind: WordKind::Printable,
                    preview: String::from_utf8_lossy(payload).into_owned(),
                }
            } else {
                WordClass {
                    index,
                    kind: WordKind::Opaque,
                    preview: format!("0x{}", hex::encode(&word[..8])),
                }
            }
        }
        // All-zero word
        _ => WordClass {
            index,
            kind: WordKind::Opaque,
            preview: "0x0000000000000000".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_text_and_hash_words() {
        let mut blob = Vec::new();
        let mut text = [0u8; 32];
        text[..15].copy_from_slice(b"07AAATC0869P1ZB");
        blob.extend_from_slice(&text);
        blob.extend_from_slice(&[0x9c; 32]);

        let diag = scan(&blob);
        assert_eq!(diag.word_count, 2);
        assert_eq!(diag.words[0].kind, WordKind::Printable);
        assert_eq!(diag.words[0].preview, "07AAATC0869P1ZB");
        assert_eq!(diag.words[1].kind, WordKind::Opaque);
    }

    #[test]
    fn warns_on_truncated_tail() {
        let diag = scan(&[0u8; 33]);
        assert_eq!(diag.word_count, 1);
        assert_eq!(diag.truncated_tail_bytes, 1);
        assert_eq!(diag.warnings.len(), 1);
    }

    #[test]
    fn empty_blob_is_quiet() {
        let diag = scan(&[]);
        assert_eq!(diag.word_count, 0);
        assert!(diag.warnings.is_empty());
    }
}

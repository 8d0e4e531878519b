//! Word-pair similarity scoring.

use super::distance::distance;
use super::normalize::normalize;

/// Score handed out when two words differ raw but agree after
/// canonicalization. Kept strictly below 1.0 so an exact transcription still
/// outranks a normalization-only match when ties are broken.
const NORMALIZED_MATCH_SCORE: f64 = 0.9;

/// Similarity of two words in [0, 1].
///
/// - 1.0 for raw equality (no normalization cost paid);
/// - 0.0 when either word is empty;
/// - 0.9 when the canonical forms agree;
/// - otherwise `1 - distance / max(len)` over the canonical forms.
pub fn similarity(word1: &str, word2: &str) -> f64 {
    if word1.is_empty() || word2.is_empty() {
        return 0.0;
    }
    if word1 == word2 {
        return 1.0;
    }

    let n1 = normalize(word1);
    let n2 = normalize(word2);
    if n1 == n2 {
        // Two harakat-only words both canonicalize to "": no letters to
        // compare, so no credit.
        if n1.is_empty() {
            return 0.0;
        }
        return NORMALIZED_MATCH_SCORE;
    }

    let max_len = n1.chars().count().max(n2.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    1.0 - distance(&n1, &n2) as f64 / max_len as f64
}

//! Alignment result types.

use serde::{Deserialize, Serialize};

/// Per-reference-word comparison produced by the reporting view.
///
/// Always records the best available candidate, whether or not it clears the
/// threshold, so a UI can show "closest attempt" feedback for misses too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Reference word, original spelling.
    pub reference_word: String,
    /// Best-scoring transcript word; `None` only when the transcript held no
    /// words at all.
    pub best_candidate: Option<String>,
    /// Similarity of the pair, in [0, 1].
    pub similarity: f64,
    /// Whether `similarity` reached the caller's threshold.
    pub matched: bool,
}

/// Outcome of one consumption-view alignment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Reference words consumed by some transcript word, in consumption order.
    pub matched_words: Vec<String>,
    /// Reference words left in the pool after all transcript words ran.
    pub unmatched_words: Vec<String>,
    pub matched_count: usize,
    /// Total reference words the run started from.
    pub total_words: usize,
    /// `matched_count / total_words`, 0 for an empty reference.
    pub accuracy: f64,
    pub perfect_match: bool,
}

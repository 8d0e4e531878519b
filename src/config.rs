//! Engine and session configuration.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Library default per-word similarity threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Threshold used by interactive sessions; more forgiving than the library
/// default because live ASR output is noisier than settled transcripts.
pub const SESSION_THRESHOLD: f64 = 0.6;

fn default_threshold() -> f64 {
    SESSION_THRESHOLD
}

fn default_good_similarity() -> f64 {
    0.45
}

fn default_min_transcript_chars() -> usize {
    10
}

fn default_progress_ratio() -> f64 {
    0.9
}

/// Policy knobs for a recitation session.
///
/// The defaults mirror the interactive UI path: threshold 0.6, "good" tier at
/// 0.45 per-word similarity, a 10-character transcript floor against spurious
/// single-character triggers, and a 0.9 candidate/reference word-count ratio
/// before completion may be declared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Per-word similarity threshold for the `matched` flag.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Every record must reach this similarity for the "good" tier.
    #[serde(default = "default_good_similarity")]
    pub good_similarity: f64,
    /// Transcript char count must exceed this before completion can trigger.
    #[serde(default = "default_min_transcript_chars")]
    pub min_transcript_chars: usize,
    /// Candidate/reference word-count ratio required before completion.
    #[serde(default = "default_progress_ratio")]
    pub progress_ratio: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            good_similarity: default_good_similarity(),
            min_transcript_chars: default_min_transcript_chars(),
            progress_ratio: default_progress_ratio(),
        }
    }
}

impl SessionConfig {
    /// Reject out-of-range similarity values up front, so per-update calls
    /// cannot fail on configuration later.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(EngineError::InvalidThreshold(self.threshold));
        }
        if !(0.0..=1.0).contains(&self.good_similarity) {
            return Err(EngineError::InvalidThreshold(self.good_similarity));
        }
        Ok(())
    }
}

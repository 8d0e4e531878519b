//! Transcript feed types for wiring a live transcription source.
//!
//! The engine performs no audio work. A transcription collaborator pushes
//! whole-transcript snapshots (the best current transcript, never a delta)
//! through a channel; the session layer re-aligns on each one. The source is
//! expected to keep delivering updates, restarting itself after transient
//! termination, until the caller stops it by dropping the sender.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

// Partial updates can arrive faster than alignments are worth running; the
// session drains any backlog before acting, so the depth just absorbs bursts.
const UPDATE_CHANNEL_CAPACITY: usize = 100;

/// Whether a snapshot is provisional or settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    /// Best-effort interim transcript; will be superseded.
    Partial,
    /// The source considers this transcript final.
    Final,
}

/// One transcription update: the full accumulated transcript so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptUpdate {
    pub text: String,
    pub kind: UpdateKind,
}

impl TranscriptUpdate {
    pub fn partial(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: UpdateKind::Partial,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: UpdateKind::Final,
        }
    }
}

/// Bounded channel pair a transcription source and a session driver share.
pub fn transcript_channel() -> (
    mpsc::Sender<TranscriptUpdate>,
    mpsc::Receiver<TranscriptUpdate>,
) {
    mpsc::channel(UPDATE_CHANNEL_CAPACITY)
}

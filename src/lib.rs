//! tasmee — recitation practice accuracy engine.
//!
//! Compares a spoken attempt, as transcribed by a live ASR source, against a
//! reference passage and reports per-word matches, an aggregate accuracy and
//! a completion decision. The alignment core is pure and synchronous; the
//! session layer re-runs it on every transcript snapshot a transcription
//! collaborator delivers.

pub mod align;
mod config;
mod error;
pub mod quran;
mod session;
pub mod transcription;

pub use align::{
    align, coverage_ratio, distance, extract_words, match_report, normalize, report_accuracy,
    similarity, AlignmentResult, MatchRecord,
};
pub use config::{SessionConfig, DEFAULT_THRESHOLD, SESSION_THRESHOLD};
pub use error::EngineError;
pub use session::{run_session, Completion, SessionStatus, SessionTracker};
pub use transcription::{transcript_channel, TranscriptUpdate, UpdateKind};

//! Session accuracy tracking over a live transcript.
//!
//! A tracker owns the reference words of one passage and re-runs the
//! reporting view against every transcript snapshot it is handed. Trackers
//! are plain values: any number of independent instances behave identically,
//! and nothing is shared between calls.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::align::{
    coverage_ratio, extract_words, match_report, report_accuracy, MatchRecord,
};
use crate::config::SessionConfig;
use crate::error::EngineError;
use crate::transcription::{TranscriptUpdate, UpdateKind};

/// Completion tier reached by a recitation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    /// Every reference word found a candidate at or above the "good"
    /// similarity floor.
    Good,
    /// Every reference word's record carries `matched = true` under the
    /// session threshold.
    Perfect,
}

/// Snapshot produced by one re-alignment against the accumulated transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub records: Vec<MatchRecord>,
    /// Reporting-view accuracy: matched flags over total reference words.
    pub accuracy: f64,
    pub completion: Option<Completion>,
}

/// Tracks how close a live transcript has come to one fixed passage.
pub struct SessionTracker {
    reference: Vec<String>,
    config: SessionConfig,
}

impl SessionTracker {
    /// Extract the reference words of `reference_text` and fix them for the
    /// session. Fails only on out-of-range configuration.
    pub fn new(reference_text: &str, config: SessionConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            reference: extract_words(reference_text),
            config,
        })
    }

    pub fn reference_words(&self) -> &[String] {
        &self.reference
    }

    /// Re-run the reporting view against the entire transcript so far.
    ///
    /// The candidate sequence is regenerated from scratch each call; nothing
    /// from earlier runs is kept or diffed.
    pub fn update(&self, transcript: &str) -> Result<SessionStatus, EngineError> {
        let candidate = extract_words(transcript);
        let records = match_report(&self.reference, &candidate, self.config.threshold)?;
        let completion = self.evaluate_completion(transcript, &candidate, &records);
        Ok(SessionStatus {
            accuracy: report_accuracy(&records),
            records,
            completion,
        })
    }

    /// Completion gates, all of which must hold before any tier is awarded:
    /// at least one record, a transcript longer than the minimal floor, and
    /// enough of the passage attempted (word-count ratio).
    fn evaluate_completion(
        &self,
        transcript: &str,
        candidate: &[String],
        records: &[MatchRecord],
    ) -> Option<Completion> {
        if records.is_empty() {
            return None;
        }
        if transcript.chars().count() <= self.config.min_transcript_chars {
            return None;
        }
        if coverage_ratio(candidate, &self.reference) < self.config.progress_ratio {
            return None;
        }

        // The tiers are evaluated independently; a perfect pass in practice
        // also satisfies the good floor, and the stronger tier is reported.
        if records.iter().all(|r| r.matched) {
            return Some(Completion::Perfect);
        }
        if records
            .iter()
            .all(|r| r.similarity >= self.config.good_similarity)
        {
            return Some(Completion::Good);
        }
        None
    }
}

/// Drive a tracker from a live transcript feed.
///
/// Runs one full, independent re-alignment per update and returns the status
/// of the last run once a completion tier is reached, a final update arrives,
/// or the feed closes. Updates queued behind the newest one are drained
/// first, so a stale transcript can never overwrite a later one's status.
pub async fn run_session(
    tracker: &SessionTracker,
    mut feed: mpsc::Receiver<TranscriptUpdate>,
) -> Result<Option<SessionStatus>, EngineError> {
    let mut latest: Option<SessionStatus> = None;

    while let Some(mut update) = feed.recv().await {
        while let Ok(newer) = feed.try_recv() {
            update = newer;
        }

        let is_final = update.kind == UpdateKind::Final;
        let status = tracker.update(&update.text)?;
        tracing::debug!(
            accuracy = status.accuracy,
            completion = ?status.completion,
            final_update = is_final,
            "re-aligned transcript"
        );

        let done = status.completion.is_some();
        latest = Some(status);
        if done || is_final {
            break;
        }
    }

    Ok(latest)
}

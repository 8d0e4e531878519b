//! Greedy word alignment in two disciplines.
//!
//! The consumption view answers "how much of the reference was covered" and
//! removes a reference word from play once a transcript word claims it. The
//! reporting view answers "what is the closest attempt per reference word"
//! and deliberately never removes anything, so one transcript word may be
//! cited as the best match of several reference words. The two views diverge
//! on inputs with repeated or extra words; keep them separate.

use super::similarity::similarity;
use super::types::{AlignmentResult, MatchRecord};
use crate::error::EngineError;

/// Accuracy floor (and matched-count ratio) for `perfect_match`.
const PERFECT_ACCURACY: f64 = 0.9;

fn check_threshold(threshold: f64) -> Result<(), EngineError> {
    // Also rejects NaN: a NaN threshold is never inside the range.
    if !(0.0..=1.0).contains(&threshold) {
        return Err(EngineError::InvalidThreshold(threshold));
    }
    Ok(())
}

/// Consumption view: match transcript words against a shrinking pool of
/// reference words.
///
/// Each candidate word, in transcript order, claims the highest-similarity
/// pool entry at or above `threshold` (earliest pool position wins ties) and
/// removes it. Extra or repeated transcript words cannot double-count a
/// reference word that was already consumed.
pub fn align(
    reference: &[String],
    candidate: &[String],
    threshold: f64,
) -> Result<AlignmentResult, EngineError> {
    check_threshold(threshold)?;

    let total_words = reference.len();
    let mut pool: Vec<&String> = reference.iter().collect();
    let mut matched_words: Vec<String> = Vec::new();

    for cand in candidate {
        let mut best: Option<(usize, f64)> = None;
        for (i, word) in pool.iter().enumerate() {
            let score = similarity(word, cand);
            if score < threshold {
                continue;
            }
            // Strict improvement only, so the earliest pool entry keeps ties.
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((i, score)),
            }
        }
        if let Some((i, _)) = best {
            matched_words.push(pool.remove(i).clone());
        }
    }

    let matched_count = matched_words.len();
    let unmatched_words: Vec<String> = pool.into_iter().cloned().collect();
    let accuracy = if total_words == 0 {
        0.0
    } else {
        matched_count as f64 / total_words as f64
    };
    // The count clause is implied by the ratio for integer counts; kept as an
    // explicit second condition.
    let perfect_match =
        accuracy >= PERFECT_ACCURACY && matched_count as f64 >= PERFECT_ACCURACY * total_words as f64;

    Ok(AlignmentResult {
        matched_words,
        unmatched_words,
        matched_count,
        total_words,
        accuracy,
        perfect_match,
    })
}

/// Reporting view: one record per reference word, scanning the entire
/// transcript without consuming anything.
///
/// The best candidate is recorded even below the threshold; only the
/// `matched` flag applies it.
pub fn match_report(
    reference: &[String],
    candidate: &[String],
    threshold: f64,
) -> Result<Vec<MatchRecord>, EngineError> {
    check_threshold(threshold)?;

    let mut records = Vec::with_capacity(reference.len());
    for word in reference {
        let mut best: Option<(&String, f64)> = None;
        for cand in candidate {
            let score = similarity(word, cand);
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((cand, score)),
            }
        }
        let (best_candidate, best_score) = match best {
            Some((cand, score)) => (Some(cand.clone()), score),
            None => (None, 0.0),
        };
        records.push(MatchRecord {
            reference_word: word.clone(),
            best_candidate,
            similarity: best_score,
            matched: best_score >= threshold,
        });
    }
    Ok(records)
}

/// Accuracy as the reporting view defines it: matched flags over total
/// records. Not guaranteed to equal the consumption view's accuracy on inputs
/// with repeated or extra transcript words.
pub fn report_accuracy(records: &[MatchRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let matched = records.iter().filter(|r| r.matched).count();
    matched as f64 / records.len() as f64
}

/// Ratio of transcript word count to reference word count ("verse progress").
/// Can exceed 1.0; 0 for an empty reference.
pub fn coverage_ratio(candidate: &[String], reference: &[String]) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    candidate.len() as f64 / reference.len() as f64
}

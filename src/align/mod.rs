//! Fuzzy word alignment between a reference passage and a transcript attempt.
//!
//! ## Pipeline
//! 1. NFC normalization + Arabic word extraction (script scan, not
//!    whitespace splitting)
//! 2. Harakat-insensitive canonicalization per word
//! 3. Levenshtein-ratio similarity with exact/normalized short-circuits
//! 4. Greedy alignment, in a consuming and a non-consuming discipline
//!
//! Everything here is pure and synchronous; the session layer re-runs it on
//! every transcript update.

mod aligner;
mod distance;
mod normalize;
mod similarity;
mod types;

pub use aligner::{align, coverage_ratio, match_report, report_accuracy};
pub use distance::distance;
pub use normalize::{extract_words, normalize};
pub use similarity::similarity;
pub use types::{AlignmentResult, MatchRecord};

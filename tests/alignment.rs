//! End-to-end checks over the public API: extraction, the two alignment
//! disciplines, and the session tracker.

use tasmee::{
    align, distance, extract_words, match_report, normalize, similarity, Completion, EngineError,
    SessionConfig, SessionTracker,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn similarity_properties() {
    // Reflexive for non-empty words.
    for w in ["بسم", "الله", "الرَّحْمَٰنِ"] {
        assert_eq!(similarity(w, w), 1.0);
    }
    // Zero whenever either side is empty.
    assert_eq!(similarity("", "بسم"), 0.0);
    assert_eq!(similarity("بسم", ""), 0.0);
    // Bounded.
    for a in ["بسم", "الله", "كتاب"] {
        for b in ["الرحمن", "قل", "أَلله"] {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s));
        }
    }
}

#[test]
fn distance_properties() {
    assert_eq!(distance("الرحمن", "الرحمن"), 0);
    assert_eq!(distance("الرحمن", ""), "الرحمن".chars().count());
    assert_eq!(distance("كتاب", "كتب"), distance("كتب", "كتاب"));
}

#[test]
fn normalize_is_idempotent_over_real_text() {
    for word in extract_words("بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ") {
        let once = normalize(&word);
        assert_eq!(normalize(&once), once);
    }
}

#[test]
fn exact_recitation_scores_perfect_in_both_views() {
    let reference = words(&["بسم", "الله"]);
    let candidate = words(&["بسم", "الله"]);

    let result = align(&reference, &candidate, 0.6).unwrap();
    assert_eq!(result.accuracy, 1.0);
    assert!(result.perfect_match);

    let records = match_report(&reference, &candidate, 0.6).unwrap();
    assert!(records.iter().all(|r| r.matched && r.similarity == 1.0));
}

#[test]
fn empty_candidate_leaves_the_reference_uncovered() {
    let reference = words(&["بسم", "الله", "الرحمن"]);
    let result = align(&reference, &[], 0.6).unwrap();
    assert_eq!(result.accuracy, 0.0);
    assert_eq!(result.matched_count, 0);
    assert_eq!(result.unmatched_words.len(), 3);
    assert!(!result.perfect_match);
}

#[test]
fn hamza_variant_with_harakat_clears_the_normalized_bonus() {
    // Raw equality fails, canonicalization folds the spelling difference.
    assert!(similarity("الله", "أَلله") >= 0.9);
}

#[test]
fn consumption_view_never_double_counts_a_candidate() {
    let reference = words(&["كتاب", "كتاب"]);
    let candidate = words(&["كتاب"]);
    let result = align(&reference, &candidate, 0.6).unwrap();
    assert_eq!(result.matched_count, 1);
}

#[test]
fn views_diverge_on_repeated_words() {
    // The reporting view cites the one transcript word for both reference
    // occurrences; the consumption view covers only one of them. Their
    // accuracies intentionally differ.
    let reference = words(&["كتاب", "كتاب"]);
    let candidate = words(&["كتاب"]);

    let records = match_report(&reference, &candidate, 0.6).unwrap();
    assert!(records.iter().all(|r| r.matched));

    let result = align(&reference, &candidate, 0.6).unwrap();
    assert_eq!(result.accuracy, 0.5);
}

#[test]
fn partition_invariant_holds_for_messy_input() {
    let reference = extract_words("قُلْ هُوَ اللَّهُ أَحَدٌ");
    let candidate = extract_words("قل هو له احد احد والله");
    let result = align(&reference, &candidate, 0.6).unwrap();
    assert_eq!(
        result.matched_count + result.unmatched_words.len(),
        reference.len()
    );
}

#[test]
fn bad_thresholds_are_configuration_errors() {
    let reference = words(&["بسم"]);
    for bad in [1.5, -0.1] {
        assert!(matches!(
            align(&reference, &reference, bad),
            Err(EngineError::InvalidThreshold(_))
        ));
        assert!(matches!(
            match_report(&reference, &reference, bad),
            Err(EngineError::InvalidThreshold(_))
        ));
    }
}

#[test]
fn session_tracks_a_passage_loaded_from_disk() {
    use std::io::Write as _;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ").unwrap();

    let reference_text = std::fs::read_to_string(file.path()).unwrap();
    let tracker = SessionTracker::new(&reference_text, SessionConfig::default()).unwrap();
    assert_eq!(tracker.reference_words().len(), 4);

    let status = tracker.update("بسم الله الرحمن الرحيم").unwrap();
    assert_eq!(status.completion, Some(Completion::Perfect));
}

#[test]
fn session_config_roundtrips_through_json() {
    let config = SessionConfig {
        threshold: 0.7,
        ..SessionConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: SessionConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.threshold, 0.7);
    assert_eq!(back.good_similarity, config.good_similarity);
}

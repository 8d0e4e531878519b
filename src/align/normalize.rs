//! Arabic canonicalization and word extraction.
//!
//! Live transcription engines spell interchangeable letter variants
//! inconsistently (hamza seats, maksura, harakat), so comparison happens on a
//! folded form while the extracted words keep their original spelling for
//! display.

use unicode_normalization::UnicodeNormalization;

/// Combining harakat stripped before comparison (tanween, short vowels,
/// shadda, sukun and friends, plus the superscript alef).
fn is_haraka(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Maximal runs of Arabic-block code points count as words; everything else
/// separates them.
fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

/// Canonicalize a single word for comparison.
///
/// - strips harakat;
/// - folds hamza-bearing alif variants (آ أ إ) to plain alef (ا);
/// - folds alef maksura (ى) to yeh (ي).
///
/// Pure and total: never fails, empty input yields empty output, and the
/// result is a fixed point (normalizing twice changes nothing).
pub fn normalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if is_haraka(c) {
            continue;
        }
        match c {
            // Alef with madda / hamza above / hamza below
            '\u{0622}' | '\u{0623}' | '\u{0625}' => out.push('\u{0627}'),
            // Alef maksura
            '\u{0649}' => out.push('\u{064A}'),
            _ => out.push(c),
        }
    }
    out
}

/// Extract the ordered Arabic words of a free-text fragment.
///
/// The text is NFC-normalized, then scanned for maximal runs of Arabic-block
/// characters. Punctuation, Latin text and digits are discarded rather than
/// kept as empty tokens, so whitespace conventions of the source text do not
/// matter. Harakat sit inside the Arabic block and therefore stay attached to
/// their word.
pub fn extract_words(text: &str) -> Vec<String> {
    let nfc: String = text.nfc().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for c in nfc.chars() {
        if is_arabic(c) {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_harakat() {
        assert_eq!(normalize("بِسْمِ"), "بسم");
        assert_eq!(normalize("اللَّهِ"), "الله");
    }

    #[test]
    fn folds_alef_variants() {
        assert_eq!(normalize("أَعُوذُ"), "اعوذ");
        assert_eq!(normalize("إِلَيْهِ"), "اليه");
        assert_eq!(normalize("آمَنَ"), "امن");
    }

    #[test]
    fn folds_alef_maksura_to_yeh() {
        assert_eq!(normalize("هُدًى"), "هدي");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for word in ["بِسْمِ", "أَلله", "مُوسَىٰ", "قُرْآن"] {
            let once = normalize(word);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn extracts_words_by_script_scan() {
        let words = extract_words("﴿بِسْمِ اللَّهِ﴾ (1) hello الرَّحْمَٰنِ.");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], "بِسْمِ");
        assert_eq!(words[1], "اللَّهِ");
        assert_eq!(words[2], "الرَّحْمَٰنِ");
    }

    #[test]
    fn extract_discards_non_script_text() {
        assert!(extract_words("abc 123 ...").is_empty());
        assert!(extract_words("").is_empty());
    }
}

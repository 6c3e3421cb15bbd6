use crate::types::{NormalizedWord, TreatmentFrequencyMap, TreatmentMatchMap};

/// Counts, over the full non-deduplicated corpus sequence, how many times each
/// canonical name's matched words occur. A word matched once at the set stage
/// contributes one count per corpus occurrence. Only canonical names with at least one
/// occurrence appear in the result.
pub fn count_treatment_frequencies(
    corpus_words: &[NormalizedWord],
    matches: &TreatmentMatchMap,
) -> TreatmentFrequencyMap {
    let mut frequencies = TreatmentFrequencyMap::new();

    for word in corpus_words {
        for (canonical_name, matched_words) in matches {
            if matched_words.contains(word) {
                *frequencies.entry(canonical_name.clone()).or_insert(0) += 1;
            }
        }
    }

    frequencies
}

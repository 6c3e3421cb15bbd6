use std::collections::{BTreeSet, HashSet};

use crate::types::{CandidateWord, NormalizedWord};

/// Classifies normalized words as common (discard) or out-of-vocabulary (keep for
/// matching), against a reference lexicon and a stop-word set supplied by the caller.
pub struct VocabularyFilter<'a> {
    lexicon: &'a HashSet<String>,
    stop_words: &'a HashSet<String>,
}

impl<'a> VocabularyFilter<'a> {
    pub fn new(lexicon: &'a HashSet<String>, stop_words: &'a HashSet<String>) -> Self {
        VocabularyFilter {
            lexicon,
            stop_words,
        }
    }

    /// Returns the sorted, deduplicated candidate words from `words`.
    pub fn candidate_words(&self, words: &[NormalizedWord]) -> Vec<CandidateWord> {
        let unique_words: BTreeSet<&NormalizedWord> = words.iter().collect();

        unique_words
            .into_iter()
            .filter(|word| self.is_candidate(word.as_str()))
            .cloned()
            .collect()
    }

    /// A word is a candidate when it is in neither reference set, with one exception:
    /// a word ending in `s` whose singular form is in the lexicon is treated as the
    /// plural of a known word and discarded, since the lexicon does not enumerate
    /// plural spellings.
    pub fn is_candidate(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        if self.lexicon.contains(word) || self.stop_words.contains(word) {
            return false;
        }

        if let Some(singular) = word.strip_suffix('s') {
            if self.lexicon.contains(singular) {
                return false;
            }
        }

        true
    }
}

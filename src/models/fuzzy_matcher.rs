use std::collections::HashMap;

use crate::models::{AnagramIndex, TreatmentCatalog};
use crate::types::{CandidateWord, NormalizedWord, TreatmentMatchMap};
use crate::utils::{deletion_variants, strip_vowels};

/// Joins the candidate-side and alias-side anagram indices on shared signatures.
///
/// Vowel-stripped-vs-vowel-stripped comparison catches exact spellings and vowel
/// confusions; deletion variants of the candidate's original spelling catch one extra
/// inserted character relative to a correct alias. Because the signature is a sorted
/// letter key, transposition typos are absorbed for free. Substitutions and
/// multi-character edits are out of reach, and unrelated words whose stripped forms
/// collide are reported as matches; both limits are accepted.
pub struct FuzzyMatcher<'a> {
    catalog: &'a TreatmentCatalog,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(catalog: &'a TreatmentCatalog) -> Self {
        FuzzyMatcher { catalog }
    }

    /// Maps each canonical name to the candidate words matched to it, set semantics
    /// per canonical name. Work is proportional to the populated shared keys, not to
    /// the candidate-times-alias cross product.
    pub fn match_candidates(&self, candidate_words: &[CandidateWord]) -> TreatmentMatchMap {
        let candidate_index = Self::build_candidate_index(candidate_words);

        let mut matches: TreatmentMatchMap = HashMap::new();

        for (key, alias_bucket) in self.catalog.alias_index().iter() {
            if let Some(candidate_bucket) = candidate_index.bucket(key) {
                for (_candidate_variant, source_word) in candidate_bucket {
                    if source_word.is_empty() {
                        continue;
                    }

                    for (_alias_variant, canonical_name) in alias_bucket {
                        let matched_words = matches.entry(canonical_name.clone()).or_default();

                        if !matched_words.contains(source_word) {
                            matched_words.push(source_word.clone());
                        }
                    }
                }
            }
        }

        matches
    }

    /// Indexes each candidate word under its vowel-stripped form and under every
    /// single-character-deletion form of its original spelling, all owned by the
    /// original word.
    fn build_candidate_index(candidate_words: &[CandidateWord]) -> AnagramIndex<NormalizedWord> {
        let mut candidate_index = AnagramIndex::new();

        for word in candidate_words {
            candidate_index.insert(&strip_vowels(word), word.clone());

            for variant in deletion_variants(word) {
                candidate_index.insert(&variant, word.clone());
            }
        }

        candidate_index
    }
}

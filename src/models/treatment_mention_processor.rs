use log::info;

use crate::models::{AnalysisContext, FuzzyMatcher, Tokenizer, VocabularyFilter};
use crate::types::{NormalizedWord, TreatmentFrequencyMap, TreatmentMatchMap};
use crate::utils::count_treatment_frequencies;
use crate::Error;

/// Results of one corpus run.
pub struct TreatmentExtraction {
    /// Canonical name to the duplicate-free list of corpus words matched to it.
    pub matches: TreatmentMatchMap,
    /// Canonical name to the raw occurrence count of its matched words over the full,
    /// non-deduplicated corpus.
    pub frequencies: TreatmentFrequencyMap,
}

/// Runs the matching pipeline for one corpus (or one filtered subset of it) against a
/// shared `AnalysisContext`. Candidate-side structures are rebuilt per run; the context
/// and its alias index are never mutated.
pub struct TreatmentMentionProcessor<'a> {
    context: &'a AnalysisContext,
    tokenizer: Tokenizer,
}

impl<'a> TreatmentMentionProcessor<'a> {
    pub fn new(context: &'a AnalysisContext) -> Self {
        TreatmentMentionProcessor {
            context,
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn process_text_doc(&self, text: &str) -> Result<TreatmentExtraction, Error> {
        self.process_fragments([text])
    }

    /// Processes an ordered sequence of raw text fragments, e.g. one per post or
    /// comment. Which fragments make up the sequence (the full corpus, a single
    /// author's subset) is the caller's decision.
    pub fn process_fragments<I, S>(&self, fragments: I) -> Result<TreatmentExtraction, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Tokenize the input fragments, preserving order and duplicates
        info!("Tokenizing...");
        let mut corpus_words: Vec<NormalizedWord> = Vec::new();
        for fragment in fragments {
            corpus_words.extend(self.tokenizer.tokenize(fragment.as_ref()));
        }

        // Deduplicate and drop in-vocabulary words before the fuzzy stage
        info!("Filtering vocabulary...");
        let vocabulary_filter =
            VocabularyFilter::new(&self.context.lexicon, &self.context.stop_words);
        let candidate_words = vocabulary_filter.candidate_words(&corpus_words);

        info!("Matching candidates...");
        let fuzzy_matcher = FuzzyMatcher::new(&self.context.catalog);
        let matches = fuzzy_matcher.match_candidates(&candidate_words);

        // Frequencies run over the full corpus sequence, not the deduplicated set
        info!("Counting occurrences...");
        let frequencies = count_treatment_frequencies(&corpus_words, &matches);

        Ok(TreatmentExtraction {
            matches,
            frequencies,
        })
    }
}

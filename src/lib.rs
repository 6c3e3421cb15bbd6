mod constants;
pub mod models;
pub use models::{
    AnagramIndex, AnalysisContext, Error, FuzzyMatcher, Tokenizer, TreatmentCatalog,
    TreatmentExtraction, TreatmentMentionProcessor, VocabularyFilter,
};
pub mod types;
pub mod utils;
pub use types::{
    AliasName, AnagramKey, CandidateWord, CanonicalName, NormalizedWord, Token,
    TreatmentCatalogList, TreatmentFrequencyMap, TreatmentMatchMap,
};

/// Runs the full matching pipeline over a single text document.
pub fn extract_treatments_from_text(
    text: &str,
    context: &AnalysisContext,
) -> Result<TreatmentExtraction, Error> {
    let processor = TreatmentMentionProcessor::new(context);

    processor.process_text_doc(text)
}

/// Runs the pipeline over an ordered sequence of raw text fragments, e.g. one per
/// retrieved post, or a subset the caller has already filtered to a single author.
pub fn extract_treatments_from_fragments<I, S>(
    fragments: I,
    context: &AnalysisContext,
) -> Result<TreatmentExtraction, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let processor = TreatmentMentionProcessor::new(context);

    processor.process_fragments(fragments)
}

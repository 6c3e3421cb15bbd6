pub mod anagram_index;
pub use anagram_index::AnagramIndex;

pub mod analysis_context;
pub use analysis_context::AnalysisContext;

pub mod error;
pub use error::Error;

pub mod fuzzy_matcher;
pub use fuzzy_matcher::FuzzyMatcher;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod treatment_catalog;
pub use treatment_catalog::TreatmentCatalog;

pub mod treatment_mention_processor;
pub use treatment_mention_processor::{TreatmentExtraction, TreatmentMentionProcessor};

pub mod vocabulary_filter;
pub use vocabulary_filter::VocabularyFilter;

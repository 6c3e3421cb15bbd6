use std::collections::HashSet;

use crate::constants::STOP_WORDS;
use crate::models::TreatmentCatalog;

/// Shared, immutable inputs for one analysis session: the reference lexicon, the
/// stop-word set, and the treatment catalog. Constructed once by the caller and passed
/// by reference into the engine's entry points, so separate catalogs (e.g. different
/// disease states) can run concurrently or back to back without cross-contamination.
pub struct AnalysisContext {
    pub lexicon: HashSet<String>,
    pub stop_words: HashSet<String>,
    pub catalog: TreatmentCatalog,
}

impl AnalysisContext {
    /// Builds a context with the built-in English stop-word list.
    pub fn new(lexicon: HashSet<String>, catalog: TreatmentCatalog) -> Self {
        let stop_words = STOP_WORDS.iter().map(|word| word.to_string()).collect();

        AnalysisContext {
            lexicon,
            stop_words,
            catalog,
        }
    }

    pub fn with_stop_words(
        lexicon: HashSet<String>,
        stop_words: HashSet<String>,
        catalog: TreatmentCatalog,
    ) -> Self {
        AnalysisContext {
            lexicon,
            stop_words,
            catalog,
        }
    }
}

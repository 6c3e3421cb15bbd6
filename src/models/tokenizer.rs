use crate::constants::{WORD_SEPARATORS, WORD_TRIM_CHARS};
use crate::types::NormalizedWord;

#[derive(Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer
    }

    /// Splits raw text into an ordered sequence of normalized words, duplicates preserved.
    ///
    /// Scraped text frequently carries literal `\n` escape sequences and uses slashes,
    /// apostrophes, hyphens, and pipes as in-word separators; each of those produces
    /// multiple sub-tokens. Sub-tokens that are empty or entirely numeric are dropped,
    /// and the check runs again after trimming because trimming can empty a sub-token
    /// that survived the split.
    pub fn tokenize(self, text: &str) -> Vec<NormalizedWord> {
        text.to_lowercase()
            .replace("\\n", " ") // Literal escaped newlines left over from scraping
            .split_whitespace()
            .flat_map(|token| {
                token
                    .split(WORD_SEPARATORS)
                    .map(|sub_token| sub_token.to_string())
                    .collect::<Vec<_>>()
            })
            .filter(|word| !Self::is_discardable(word))
            .map(|word| word.trim_matches(WORD_TRIM_CHARS).to_string())
            .filter(|word| !Self::is_discardable(word))
            .collect()
    }

    fn is_discardable(word: &str) -> bool {
        word.is_empty() || word.chars().all(|c| c.is_ascii_digit())
    }
}

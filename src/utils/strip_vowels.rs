use crate::constants::VOWELS;

/// Removes all vowel characters from `word`, preserving the relative order of the
/// remaining letters. Vowels are the source of many misspellings, so comparisons run
/// on the stripped form. A word with no vowels passes through unchanged.
pub fn strip_vowels(word: &str) -> String {
    word.chars().filter(|c| !VOWELS.contains(c)).collect()
}

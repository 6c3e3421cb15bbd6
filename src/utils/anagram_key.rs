use crate::types::AnagramKey;

/// Sorted-character signature of a string. Permutations of the same letters share a
/// key, which is what lets the index absorb transposition typos.
pub fn anagram_key(word: &str) -> AnagramKey {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

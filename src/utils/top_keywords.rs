use std::collections::{HashMap, HashSet};

use crate::types::NormalizedWord;

/// The `n` most frequent corpus words, excluding stop words and one-letter residues
/// (those are almost always fragments of split contractions, e.g. "don't" > "don",
/// "t"). Ties break by word, ascending, for deterministic output.
pub fn top_keywords(
    corpus_words: &[NormalizedWord],
    stop_words: &HashSet<String>,
    n: usize,
) -> Vec<(NormalizedWord, usize)> {
    let mut counts: HashMap<&NormalizedWord, usize> = HashMap::new();

    for word in corpus_words {
        if word.chars().count() > 1 && !stop_words.contains(word) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(NormalizedWord, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.clone(), count))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);

    ranked
}

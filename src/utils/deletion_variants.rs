/// All forms of `word` with exactly one character removed, one per character position,
/// eagerly materialized. Models a single inserted character relative to a shorter
/// correct spelling, e.g. "techfidera" yields "tecfidera" among its variants. A word of
/// length one (or an empty word) yields itself as its only variant.
pub fn deletion_variants(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();

    if chars.len() <= 1 {
        return vec![word.to_string()];
    }

    (0..chars.len())
        .map(|skipped_position| {
            chars
                .iter()
                .enumerate()
                .filter(|(position, _)| *position != skipped_position)
                .map(|(_, c)| c)
                .collect()
        })
        .collect()
}

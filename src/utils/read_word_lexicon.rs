use flate2::read::GzDecoder;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::Error;

/// Loads a reference lexicon from a file, one word per line. Files with a `.gz`
/// extension are decompressed on the fly; a lexicon of tens of thousands of words
/// compresses well enough to be worth shipping that way.
pub fn read_word_lexicon_from_file(path: &Path) -> Result<HashSet<String>, Error> {
    let file = File::open(path)?;

    if path.extension().map_or(false, |extension| extension == "gz") {
        read_word_lexicon(GzDecoder::new(file))
    } else {
        read_word_lexicon(file)
    }
}

/// Reads a lexicon from any reader, lower-casing each entry and skipping blank lines.
pub fn read_word_lexicon<R: Read>(reader: R) -> Result<HashSet<String>, Error> {
    let mut lexicon = HashSet::new();

    for line in BufReader::new(reader).lines() {
        let word = line?.trim().to_lowercase();

        if !word.is_empty() {
            lexicon.insert(word);
        }
    }

    Ok(lexicon)
}

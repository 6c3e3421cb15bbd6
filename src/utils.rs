pub mod anagram_key;
pub use anagram_key::anagram_key;

pub mod count_treatment_frequencies;
pub use count_treatment_frequencies::count_treatment_frequencies;

pub mod deletion_variants;
pub use deletion_variants::deletion_variants;

pub mod read_treatment_catalog;
pub use read_treatment_catalog::read_treatment_catalog_from_string;

pub mod read_word_lexicon;
pub use read_word_lexicon::{read_word_lexicon, read_word_lexicon_from_file};

pub mod strip_vowels;
pub use strip_vowels::strip_vowels;

pub mod top_keywords;
pub use top_keywords::top_keywords;

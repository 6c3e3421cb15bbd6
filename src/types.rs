use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a raw token as an owned `String`. Tokens are the basic units used for
/// processing text.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not
/// required.
pub type TokenRef = str;

/// A token after normalization: lower-cased, separator-split, and trimmed of leading and
/// trailing symbol characters.
pub type NormalizedWord = String;

/// A `NormalizedWord` classified as out-of-vocabulary and therefore eligible for fuzzy
/// matching against the treatment catalog.
pub type CandidateWord = NormalizedWord;

/// The normalized display name of a treatment, used as the key in all reporting output.
pub type CanonicalName = String;

/// Any known correct spelling or synonym for a canonical name, including generic and
/// brand-name pairs.
pub type AliasName = String;

/// A catalog as configured by the caller, where each entry includes:
/// - `CanonicalName`: The treatment's display name.
/// - `Vec<AliasName>`: A non-empty ordered list of known spellings for it.
pub type TreatmentCatalogList = Vec<(CanonicalName, Vec<AliasName>)>;

/// The sorted-character signature of a variant string. Two strings that are letter
/// permutations of each other share a key.
pub type AnagramKey = String;

/// Maps each canonical name to the insertion-ordered, duplicate-free list of corpus words
/// matched to it.
pub type TreatmentMatchMap = HashMap<CanonicalName, Vec<NormalizedWord>>;

/// Represents the total number of occurrences of a treatment's matched words within a
/// corpus.
pub type TreatmentFrequency = usize;

/// Represents a map of canonical names to their frequency counts within a corpus.
/// The key is the `CanonicalName`, and the value is the `TreatmentFrequency`.
pub type TreatmentFrequencyMap = HashMap<CanonicalName, TreatmentFrequency>;

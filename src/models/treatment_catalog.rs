use crate::models::AnagramIndex;
use crate::types::{CanonicalName, TreatmentCatalogList};
use crate::utils::strip_vowels;
use crate::Error;

/// The configured treatment catalog and its derived alias index. Built once per
/// analysis session and read-only thereafter, so it may be shared across runs.
pub struct TreatmentCatalog {
    entries: TreatmentCatalogList,
    alias_index: AnagramIndex<CanonicalName>,
}

impl TreatmentCatalog {
    /// Validates the catalog entries and builds the alias-side index. Every alias is
    /// recorded twice: once under its original spelling and once under its
    /// vowel-stripped spelling, both owned by the entry's canonical name.
    pub fn from_entries(entries: TreatmentCatalogList) -> Result<Self, Error> {
        let mut alias_index = AnagramIndex::new();

        for (canonical_name, aliases) in &entries {
            if canonical_name.is_empty() {
                return Err(Error::CatalogError(
                    "catalog entry with an empty canonical name".to_string(),
                ));
            }

            if aliases.is_empty() {
                return Err(Error::CatalogError(format!(
                    "no aliases configured for '{}'",
                    canonical_name
                )));
            }

            for alias in aliases {
                alias_index.insert(alias, canonical_name.clone());
                alias_index.insert(&strip_vowels(alias), canonical_name.clone());
            }
        }

        Ok(TreatmentCatalog {
            entries,
            alias_index,
        })
    }

    pub fn alias_index(&self) -> &AnagramIndex<CanonicalName> {
        &self.alias_index
    }

    pub fn entries(&self) -> &TreatmentCatalogList {
        &self.entries
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &CanonicalName> {
        self.entries.iter().map(|(canonical_name, _)| canonical_name)
    }
}

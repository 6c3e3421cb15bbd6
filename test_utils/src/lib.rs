use std::collections::HashSet;
use std::error::Error;
use std::fs;

use rx_sniffer::types::TreatmentCatalogList;
use rx_sniffer::utils::read_treatment_catalog_from_string;
use rx_sniffer::TreatmentCatalog;

/// Utility to load a treatment catalog from a CSV file for testing and benchmarking.
pub fn load_catalog_from_file(file_path: &str) -> Result<TreatmentCatalogList, Box<dyn Error>> {
    let csv = fs::read_to_string(file_path)?;

    Ok(read_treatment_catalog_from_string(&csv)?)
}

/// Builds a validated catalog from borrowed literals.
pub fn build_catalog(entries: &[(&str, &[&str])]) -> TreatmentCatalog {
    let catalog_entries: TreatmentCatalogList = entries
        .iter()
        .map(|(canonical_name, aliases)| {
            (
                canonical_name.to_string(),
                aliases.iter().map(|alias| alias.to_string()).collect(),
            )
        })
        .collect();

    TreatmentCatalog::from_entries(catalog_entries).expect("test catalog should be valid")
}

/// Builds a lexicon set from borrowed literals.
pub fn lexicon_of(words: &[&str]) -> HashSet<String> {
    words.iter().map(|word| word.to_string()).collect()
}

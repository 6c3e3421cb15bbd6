use csv::ReaderBuilder;
use std::io::Cursor;

use crate::types::TreatmentCatalogList;
use crate::Error;

/// Parses catalog entries from a CSV with `Canonical Name` and `Aliases` columns,
/// where the aliases field holds a comma-separated list. Alias spellings are trimmed
/// and lower-cased; the canonical name is kept as written.
pub fn read_treatment_catalog_from_string(csv: &str) -> Result<TreatmentCatalogList, Error> {
    let mut catalog_entries = TreatmentCatalogList::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(csv));

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let canonical_column = headers
        .iter()
        .position(|header| header == "Canonical Name")
        .ok_or_else(|| Error::ParserError("Missing 'Canonical Name' column".to_string()))?;

    let aliases_column = headers
        .iter()
        .position(|header| header == "Aliases")
        .ok_or_else(|| Error::ParserError("Missing 'Aliases' column".to_string()))?;

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let canonical_name = record
            .get(canonical_column)
            .ok_or_else(|| Error::ParserError("Missing 'Canonical Name' field".to_string()))?;

        let aliases: Vec<String> = record
            .get(aliases_column)
            .map(|comma_separated_aliases| {
                comma_separated_aliases
                    .split(',')
                    .map(|alias| alias.trim().to_lowercase())
                    .filter(|alias| !alias.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        catalog_entries.push((canonical_name.to_string(), aliases));
    }

    Ok(catalog_entries)
}

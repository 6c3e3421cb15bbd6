use log::error;
use rx_sniffer::utils::{read_treatment_catalog_from_string, read_word_lexicon_from_file};
use rx_sniffer::{extract_treatments_from_text, AnalysisContext, TreatmentCatalog};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let mut args = env::args().skip(1);
    let (catalog_path, lexicon_path) = match (args.next(), args.next()) {
        (Some(catalog_path), Some(lexicon_path)) => (catalog_path, lexicon_path),
        _ => {
            eprintln!("Usage: rx-sniffer-cli <catalog.csv> <lexicon.txt[.gz]> < corpus.txt");
            std::process::exit(1);
        }
    };

    let context = match build_context(&catalog_path, &lexicon_path) {
        Ok(context) => context,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Read the corpus text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    match extract_treatments_from_text(&input, &context) {
        Ok(results) => {
            // Convert the HashMap into a Vec and sort it by frequency (descending),
            // then by canonical name (ascending) for deterministic order.
            let mut sorted_results: Vec<_> = results.frequencies.iter().collect();
            sorted_results.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (canonical_name, frequency) in sorted_results {
                let matched_words = results
                    .matches
                    .get(canonical_name)
                    .map(|words| words.join(" "))
                    .unwrap_or_default();

                println!("{}: {} [{}]", canonical_name, frequency, matched_words);
            }
        }
        Err(e) => {
            error!("Error extracting treatments: {}", e);
            std::process::exit(1);
        }
    }
}

fn build_context(catalog_path: &str, lexicon_path: &str) -> Result<AnalysisContext, rx_sniffer::Error> {
    let catalog_csv = fs::read_to_string(catalog_path)?;
    let catalog_entries = read_treatment_catalog_from_string(&catalog_csv)?;
    let catalog = TreatmentCatalog::from_entries(catalog_entries)?;

    let lexicon = read_word_lexicon_from_file(Path::new(lexicon_path))?;

    Ok(AnalysisContext::new(lexicon, catalog))
}

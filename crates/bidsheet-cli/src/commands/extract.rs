//! Extract command - run extraction for one document and emit records.

use std::path::PathBuf;

use colored::Colorize;
use bidsheet::{ItemRecord, RawItem, load_document};

use crate::cli::ProviderChoice;

pub fn run(
    file: PathBuf,
    provider: ProviderChoice,
    model: Option<String>,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    println!(
        "{} {}",
        "Extracting".cyan().bold(),
        file.display().to_string().white()
    );

    let extractor = super::build_extractor(provider, model)?;
    let (text, metadata) = load_document(&file)?;

    if verbose {
        println!(
            "  {} chars, sha256 {}",
            metadata.char_count,
            &metadata.hash[..12]
        );
        println!("  model: {}", extractor.config().model);
    }

    let raw = extractor.extract_items(&text)?;
    let extracted = raw.len();
    let records: Vec<ItemRecord> = raw.into_iter().filter_map(RawItem::into_record).collect();
    let dropped = extracted - records.len();

    println!(
        "Extracted {} items{}",
        records.len().to_string().white().bold(),
        if dropped > 0 {
            format!(" ({} dropped)", dropped).yellow().to_string()
        } else {
            String::new()
        }
    );

    let json = serde_json::to_string_pretty(&records)?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            println!(
                "{} {}",
                "Wrote".cyan().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}

//! Example: Compare quote documents with the mock extractor.
//!
//! Usage:
//!   cargo run --example compare -- <baseline> <quote>...
//!
//! Documents are plain text with one pipe-delimited item per line:
//!   description | quantity | uom | unit_price

use std::env;
use std::path::PathBuf;

use bidsheet::{Bidsheet, MockExtractor};

fn main() -> bidsheet::Result<()> {
    let paths: Vec<PathBuf> = env::args().skip(1).map(PathBuf::from).collect();

    if paths.is_empty() {
        eprintln!("Usage: cargo run --example compare -- <baseline> <quote>...");
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Bidsheet Comparison ({} documents)", paths.len());
    println!("{}", separator);
    println!();

    // Mock extractor: no API key needed, documents are parsed directly.
    let pipeline = Bidsheet::new().with_extractor(MockExtractor::new());
    let result = pipeline.compare(&paths)?;

    println!("## Documents");
    for doc in &result.documents {
        println!(
            "  {}: {} items ({} dropped)",
            doc.vendor, doc.kept, doc.dropped
        );
    }
    println!();

    println!("## Comparison");
    for group in &result.groups {
        let prices: Vec<String> = group
            .prices
            .iter()
            .map(|p| match p {
                Some(p) => format!("{p:.2}"),
                None => "-".to_string(),
            })
            .collect();
        println!("  {:40} [{}]", group.description, prices.join(", "));
    }
    println!();

    if !result.unmatched.is_empty() {
        println!("## Unmatched");
        for item in &result.unmatched {
            println!(
                "  {} (document {})",
                item.item.description, item.document_index
            );
        }
        println!();
    }

    println!("{}", result.summary.recommendation);

    Ok(())
}

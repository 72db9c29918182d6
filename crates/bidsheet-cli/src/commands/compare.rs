//! Compare command - run the full pipeline and write the sheet.

use std::path::PathBuf;

use colored::Colorize;
use bidsheet::{Bidsheet, BidsheetConfig, CsvSink, SheetLayout, XlsxSink, write_comparison};

use crate::cli::{OutputFormat, ProviderChoice};

#[allow(clippy::too_many_arguments)]
pub fn run(
    files: Vec<PathBuf>,
    output: Option<PathBuf>,
    format: OutputFormat,
    threshold: Option<u8>,
    layout: Option<PathBuf>,
    provider: ProviderChoice,
    model: Option<String>,
    save_report: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for file in &files {
        if !file.exists() {
            return Err(format!("File not found: {}", file.display()).into());
        }
    }

    let mut config = BidsheetConfig::default();
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }
    if let Some(ref layout_path) = layout {
        config.layout = SheetLayout::load(layout_path)?;
    }

    println!(
        "{} {} documents (baseline: {})",
        "Comparing".cyan().bold(),
        files.len().to_string().white(),
        files[0].display().to_string().white()
    );

    let extractor = super::build_extractor(provider, model)?;
    let pipeline = Bidsheet::with_config(config).with_extractor(extractor);
    let result = pipeline.compare(&files)?;

    for doc in &result.documents {
        let dropped = if doc.dropped > 0 {
            format!(" ({} dropped)", doc.dropped).yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {} items from {}{}",
            "Extracted".green(),
            doc.kept.to_string().white().bold(),
            doc.vendor.white(),
            dropped
        );
    }

    if verbose {
        println!();
        println!("{}", "Matches:".yellow().bold());
        for event in &result.events {
            let baseline = &result.groups[event.baseline_index];
            println!(
                "  '{}' -> '{}' (score {}, {})",
                baseline.description,
                event.matched_description,
                event.score.to_string().white().bold(),
                result.documents[event.document_index].vendor
            );
        }
        println!();
    }

    for item in &result.unmatched {
        println!(
            "{} unmatched item in {}: '{}'",
            "Warning:".yellow().bold(),
            result.documents[item.document_index].vendor,
            item.item.description
        );
    }

    println!(
        "Reconciled {} rows ({} matched slots, {} empty, {} unmatched items)",
        result.groups.len().to_string().white().bold(),
        result.summary.matched_slots.to_string().green(),
        result.summary.empty_slots.to_string().yellow(),
        result.summary.unmatched_items.to_string().yellow()
    );
    println!("{}", result.summary.recommendation);

    let output = output.unwrap_or_else(|| PathBuf::from(format!("comparison.{}", format.extension())));
    match format {
        OutputFormat::Xlsx => {
            let mut sink = XlsxSink::new(&output)?;
            write_comparison(&mut sink, &result.groups, &pipeline.config().layout)?;
        }
        OutputFormat::Csv => {
            let mut sink = CsvSink::new(&output);
            write_comparison(&mut sink, &result.groups, &pipeline.config().layout)?;
        }
        OutputFormat::Json => {
            result.save(&output)?;
        }
    }
    println!(
        "{} {}",
        "Wrote".cyan().bold(),
        output.display().to_string().white()
    );

    if let Some(report_path) = save_report {
        result.save(&report_path)?;
        println!(
            "{} {}",
            "Saved report".cyan().bold(),
            report_path.display().to_string().white()
        );
    }

    Ok(())
}

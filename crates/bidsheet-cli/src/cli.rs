//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bidsheet: vendor quote comparison tool
#[derive(Parser)]
#[command(name = "bidsheet")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare quote documents and write a price comparison sheet
    Compare {
        /// Document text files; the first is the baseline RFQ
        #[arg(value_name = "FILES", num_args = 1.., required = true)]
        files: Vec<PathBuf>,

        /// Output path (default: comparison.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "xlsx")]
        format: OutputFormat,

        /// Similarity acceptance threshold, 0-100
        #[arg(short, long)]
        threshold: Option<u8>,

        /// Path to a sheet layout JSON file
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Extraction provider to use
        #[arg(long, default_value = "openai")]
        provider: ProviderChoice,

        /// Model to use (provider-specific, e.g. "gpt-4o",
        /// "llama-3.3-70b-versatile")
        #[arg(long)]
        model: Option<String>,

        /// Also save the full comparison report as JSON
        #[arg(long)]
        save_report: Option<PathBuf>,
    },

    /// Extract line items from a single document and print them
    Extract {
        /// Document text file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Extraction provider to use
        #[arg(long, default_value = "openai")]
        provider: ProviderChoice,

        /// Model to use (provider-specific)
        #[arg(long)]
        model: Option<String>,

        /// Write records to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the similarity score between two item descriptions
    Score {
        /// First description
        a: String,

        /// Second description
        b: String,
    },
}

/// Extraction provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderChoice {
    /// OpenAI-compatible endpoint (Groq etc. via OPENAI_BASE_URL)
    Openai,
    /// Anthropic Claude API
    Anthropic,
    /// Deterministic mock, no network (pipe-delimited lines)
    Mock,
}

/// Comparison output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Excel workbook
    Xlsx,
    /// CSV grid with the same cell placement
    Csv,
    /// Full comparison report as JSON
    Json,
}

impl OutputFormat {
    /// File extension for default output paths.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

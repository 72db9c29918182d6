//! Bidsheet CLI - vendor quote comparison tool.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare {
            files,
            output,
            format,
            threshold,
            layout,
            provider,
            model,
            save_report,
        } => commands::compare::run(
            files,
            output,
            format,
            threshold,
            layout,
            provider,
            model,
            save_report,
            cli.verbose,
        ),

        Commands::Extract {
            file,
            provider,
            model,
            output,
        } => commands::extract::run(file, provider, model, output, cli.verbose),

        Commands::Score { a, b } => commands::score::run(&a, &b),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

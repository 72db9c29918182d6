//! Score command - threshold tuning aid.

use colored::Colorize;
use bidsheet::{DEFAULT_THRESHOLD, token_sort_score};

pub fn run(a: &str, b: &str) -> Result<(), Box<dyn std::error::Error>> {
    let score = token_sort_score(a, b);

    let rendered = if score >= DEFAULT_THRESHOLD {
        score.to_string().green().bold()
    } else {
        score.to_string().red().bold()
    };

    println!("'{}' vs '{}'", a.white(), b.white());
    println!(
        "score {} (default threshold {})",
        rendered, DEFAULT_THRESHOLD
    );

    Ok(())
}

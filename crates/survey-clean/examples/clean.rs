//! Example: Clean a survey export with survey-clean.
//!
//! Usage:
//!   cargo run --example clean -- <file_path>
//!
//! Example:
//!   RUST_LOG=debug cargo run --example clean -- responses.csv

use std::env;
use std::path::Path;

use survey_clean::schema::DERIVED_COLUMNS;
use survey_clean::{Cell, SurveyCleaner};
use tracing_subscriber::EnvFilter;

fn main() -> survey_clean::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example clean -- <file_path>");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let result = SurveyCleaner::new().clean_file(path)?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Survey cleaning: {}", path.display());
    println!("{}", separator);
    println!();

    if let Some(ref source) = result.source {
        println!("## Source");
        println!("  File: {}", source.file);
        println!("  Format: {} (delimiter {:?})", source.format, source.delimiter);
        println!("  Rows: {}", source.row_count);
        println!("  Hash: {}", source.hash);
        println!();
    }

    println!("## LGA/LCDA");
    println!("  Rows before drop: {}", result.geo.rows_before_drop);
    println!("  Valid rows: {}", result.geo.valid_rows);
    println!("  Percent invalid: {:.2}", result.geo.percent_invalid);
    for (value, count) in &result.geo.invalid_values {
        println!("    {:30} {}", format!("{:?}", value), count);
    }
    println!();

    println!("## First rows");
    println!("  {}", DERIVED_COLUMNS.join(" | "));
    for row in 0..result.table.row_count().min(5) {
        let derived: Vec<String> = DERIVED_COLUMNS
            .iter()
            .map(|c| result.table.get(row, c).map(Cell::to_string).unwrap_or_default())
            .collect();
        println!("  {}", derived.join(" | "));
    }

    Ok(())
}

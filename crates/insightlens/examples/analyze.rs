//! Example: Analyze a CSV file with InsightLens.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>

use std::env;
use std::fs;

use insightlens::{InsightError, InsightLens};

fn main() -> insightlens::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let raw = fs::read_to_string(file_path).map_err(|e| InsightError::Io {
        path: file_path.into(),
        source: e,
    })?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("InsightLens Analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let result = InsightLens::new().analyze(&raw)?;
    let overview = &result.overview;

    println!("## Overview");
    println!("  Rows: {}", overview.row_count);
    println!("  Columns: {}", overview.column_count);
    println!("  Missing values: {}", overview.total_missing_values);
    println!("  Duplicate rows: {}", overview.duplicate_row_count);
    println!();

    println!("## Columns");
    for col in &overview.columns {
        println!(
            "  {:20} {:12} {:10} unique={:<6} nulls={}",
            col.name,
            col.semantic_type.label(),
            col.business_role.label(),
            col.unique_value_count,
            col.null_count
        );
    }
    println!();

    println!("## Metrics");
    for metric in &result.metrics {
        println!("  {:22} {}", metric.label, metric.formatted_value());
    }
    println!();

    println!("## Charts");
    for chart in &result.charts {
        println!("  {} ({} points)", chart.title, chart.len());
    }
    println!();

    println!("## Insights");
    for insight in &result.insights {
        println!("  - {}", insight);
    }
    println!();

    println!("## Recommendations");
    for (i, rec) in result.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, rec);
    }

    Ok(())
}

//! Analyze command - print metrics, charts and insights for a CSV file.

use std::path::PathBuf;

use colored::Colorize;
use insightlens::metrics::format_currency;
use insightlens::{AnalysisResult, BusinessRole, Trend};

use super::{build_engine, read_csv};

pub fn run(
    file: PathBuf,
    json: bool,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_csv(&file)?;
    let engine = build_engine(config.as_deref())?;
    let result = engine.analyze(&raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "{} rows, {} columns ({} numeric, {} categorical, {} datetime)",
        result.overview.row_count.to_string().white().bold(),
        result.overview.column_count.to_string().white().bold(),
        result.overview.numeric_column_count,
        result.overview.categorical_column_count,
        result.overview.datetime_column_count
    );
    println!();

    print_columns(&result, verbose);
    print_metrics(&result);
    print_revenue_statistics(&result);
    print_charts(&result, verbose);

    println!("{}", "Insights:".yellow().bold());
    for insight in &result.insights {
        println!("  - {}", insight);
    }
    println!();

    if result.recommendations.is_empty() {
        println!("{}", "No recommendations - data looks clean!".green());
    } else {
        println!("{}", "Recommendations:".yellow().bold());
        for (i, rec) in result.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
    }

    Ok(())
}

fn print_columns(result: &AnalysisResult, verbose: bool) {
    println!("{}", "Columns:".yellow().bold());
    for col in &result.overview.columns {
        // Only business columns unless verbose
        if !verbose && col.business_role == BusinessRole::None && !col.is_business_relevant {
            continue;
        }
        let role = if col.business_role == BusinessRole::None {
            "-".dimmed().to_string()
        } else {
            col.business_role.label().cyan().to_string()
        };
        println!(
            "  {:20} {:12} {:10} unique={:<6} nulls={}",
            col.name,
            col.semantic_type.label(),
            role,
            col.unique_value_count,
            col.null_count
        );
    }
    println!();
}

fn print_metrics(result: &AnalysisResult) {
    println!("{}", "Metrics:".yellow().bold());
    for metric in &result.metrics {
        let value = metric.formatted_value();
        let value = match metric.trend {
            Some(Trend::Up) => value.green(),
            Some(Trend::Down) => value.red(),
            _ => value.white(),
        };
        println!("  {:22} {}", metric.label, value.bold());
    }
    println!();
}

fn print_revenue_statistics(result: &AnalysisResult) {
    let Some(stats) = &result.revenue_statistics else {
        return;
    };

    println!("{} {}", "Revenue statistics:".yellow().bold(), stats.column.dimmed());
    for (label, value) in stats.rows() {
        let value = if label == "count" {
            stats.count.to_string()
        } else {
            format_currency(value)
        };
        println!("  {:22} {}", label, value);
    }
    println!();
}

fn print_charts(result: &AnalysisResult, verbose: bool) {
    if result.charts.is_empty() {
        return;
    }

    println!("{}", "Charts:".yellow().bold());
    for chart in &result.charts {
        println!("  {} ({} points)", chart.title.white(), chart.len());
        if verbose {
            for (label, value) in chart.points() {
                println!("    {:24} {}", label, value);
            }
        }
    }
    println!();
}

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// InsightLens: business insights from CSV files
#[derive(Parser)]
#[command(name = "insightlens")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CSV file and print metrics, charts and insights
    Analyze {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the full analysis result as JSON
        #[arg(long)]
        json: bool,

        /// Analysis configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Export a downloadable report for a CSV file
    Export {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>.report.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, default_value = "json")]
        format: ReportFormat,

        /// Analysis configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Metrics, insights and recommendations as JSON
    #[default]
    Json,
    /// Plain-text report
    Text,
    /// Per-column classification profile
    Csv,
}

impl ReportFormat {
    /// File extension for the default output path.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Text => "txt",
            ReportFormat::Csv => "csv",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use json, text, or csv.", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

//! Export command - write a downloadable report for a CSV file.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use colored::Colorize;
use insightlens::ExportReport;
use insightlens::report::write_column_profile;

use super::{build_engine, read_csv};
use crate::cli::ReportFormat;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    format: ReportFormat,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_csv(&file)?;
    let engine = build_engine(config.as_deref())?;
    let result = engine.analyze(&raw)?;

    let output_path = output.unwrap_or_else(|| default_output_path(&file, format));

    match format {
        ReportFormat::Json | ReportFormat::Text => {
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            let report = ExportReport::new(file_name, &result);
            let contents = if format == ReportFormat::Json {
                report.to_json()?
            } else {
                report.to_text()
            };
            fs::write(&output_path, contents)?;
        }
        ReportFormat::Csv => {
            let writer = BufWriter::new(File::create(&output_path)?);
            write_column_profile(&result.overview, writer)?;
        }
    }

    if verbose {
        println!(
            "{} metrics, {} insights, {} recommendations",
            result.metrics.len(),
            result.insights.len(),
            result.recommendations.len()
        );
    }

    println!(
        "{} {} report to {}",
        "Exported".green().bold(),
        format,
        output_path.display().to_string().white()
    );

    Ok(())
}

/// `<stem>.report.<ext>` next to the input.
fn default_output_path(file: &Path, format: ReportFormat) -> PathBuf {
    let mut p = file.to_path_buf();
    let stem = p.file_stem().unwrap_or_default().to_string_lossy().into_owned();
    p.set_file_name(format!("{}.report.{}", stem, format.extension()));
    p
}

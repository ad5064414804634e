//! CLI command implementations.

pub mod analyze;
pub mod export;

use std::fs;
use std::path::Path;

use insightlens::{AnalysisConfig, InsightLens};
use tracing::debug;

/// Largest input the CLI accepts.
pub const MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Check the upload contract and read the file as text.
pub fn read_csv(file: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let is_csv = file
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(format!("Not a CSV file: {}", file.display()).into());
    }

    let size = fs::metadata(file)?.len();
    if size > MAX_FILE_BYTES {
        return Err(format!(
            "File too large: {} ({} bytes, limit {} bytes)",
            file.display(),
            size,
            MAX_FILE_BYTES
        )
        .into());
    }

    debug!(path = %file.display(), bytes = size, "reading input");
    Ok(fs::read_to_string(file)?)
}

/// Build the engine, loading a configuration file when given.
pub fn build_engine(config: Option<&Path>) -> Result<InsightLens, Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    Ok(InsightLens::with_config(config))
}

//! Tunable heuristics for an analysis run.
//!
//! Every threshold the classifier, chart builder and insight engine rely on
//! lives here so callers can tune boundary behavior without touching code.
//! All sections deserialize with defaults, so a JSON file only needs the
//! fields it overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InsightError, Result};
use crate::input::TokenizerConfig;

/// Thresholds for column classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Minimum share of numeric values for a `numeric` column.
    pub numeric_threshold: f64,
    /// Minimum share of date values for a `datetime` column.
    pub datetime_threshold: f64,
    /// A categorical column is a `category` when unique values stay below
    /// this share of its non-empty values.
    pub category_ratio: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            numeric_threshold: 0.8,
            datetime_threshold: 0.8,
            category_ratio: 0.5,
        }
    }
}

/// Settings for chart derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Number of equal-width bins in the revenue histogram.
    pub histogram_bins: usize,
    /// A categorical column qualifies for the breakdown chart when it has
    /// fewer unique values than this.
    pub category_max_unique: usize,
    /// Maximum entries in ranked charts.
    pub top_n: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            histogram_bins: 10,
            category_max_unique: 20,
            top_n: 10,
        }
    }
}

/// Ratios that gate metric trends and recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsightThresholds {
    /// Completeness trends down when missing cells exceed this share of rows.
    pub completeness_warning_ratio: f64,
    /// Recommend cleaning when missing cells exceed this share of rows.
    pub missing_recommendation_ratio: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            completeness_warning_ratio: 0.1,
            missing_recommendation_ratio: 0.05,
        }
    }
}

/// Configuration for a full analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    pub tokenizer: TokenizerConfig,
    pub classifier: ClassifierConfig,
    pub charts: ChartConfig,
    pub thresholds: InsightThresholds,
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| InsightError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the heuristics meaningless.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("classifier.numericThreshold", self.classifier.numeric_threshold),
            ("classifier.datetimeThreshold", self.classifier.datetime_threshold),
            ("classifier.categoryRatio", self.classifier.category_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(InsightError::Config(format!(
                    "{} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }

        if self.charts.histogram_bins == 0 {
            return Err(InsightError::Config(
                "charts.histogramBins must be at least 1".to_string(),
            ));
        }
        if self.charts.top_n == 0 {
            return Err(InsightError::Config(
                "charts.topN must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.classifier.numeric_threshold, 0.8);
        assert_eq!(config.classifier.category_ratio, 0.5);
        assert_eq!(config.charts.histogram_bins, 10);
        assert_eq!(config.charts.category_max_unique, 20);
        assert_eq!(config.tokenizer.delimiter, ',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"classifier": {"numericThreshold": 0.9}, "charts": {"topN": 5}}"#)
            .unwrap();

        let config = AnalysisConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.classifier.numeric_threshold, 0.9);
        assert_eq!(config.classifier.datetime_threshold, 0.8);
        assert_eq!(config.charts.top_n, 5);
        assert_eq!(config.charts.histogram_bins, 10);
    }

    #[test]
    fn test_rejects_out_of_range_ratio() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"classifier": {"categoryRatio": 1.5}}"#).unwrap();

        let err = AnalysisConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, InsightError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AnalysisConfig::from_json_file("/nonexistent/insightlens.json").unwrap_err();
        assert!(matches!(err, InsightError::Io { .. }));
    }
}

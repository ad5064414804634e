//! Downloadable reports built from an analysis result.

use std::fmt;
use std::io;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InsightError, Result};
use crate::insightlens::AnalysisResult;
use crate::metrics::{Metric, RevenueStatistics, format_currency, format_number};
use crate::schema::DatasetOverview;

/// Export document handed to the download layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
    pub summary: DatasetSummary,
    pub metrics: Vec<Metric>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revenue_statistics: Option<RevenueStatistics>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Dataset counts shown at the top of the text report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: usize,
    pub missing_values: usize,
    pub duplicate_rows: usize,
}

impl ExportReport {
    /// Build a report stamped with the current time.
    pub fn new(file_name: impl Into<String>, result: &AnalysisResult) -> Self {
        Self::at(file_name, result, Utc::now())
    }

    /// Build a report with an explicit timestamp.
    pub fn at(file_name: impl Into<String>, result: &AnalysisResult, timestamp: DateTime<Utc>) -> Self {
        let overview = &result.overview;
        Self {
            file_name: file_name.into(),
            timestamp,
            summary: DatasetSummary {
                rows: overview.row_count,
                columns: overview.column_count,
                missing_values: overview.total_missing_values,
                duplicate_rows: overview.duplicate_row_count,
            },
            metrics: result.metrics.clone(),
            revenue_statistics: result.revenue_statistics.clone(),
            insights: result.insights.clone(),
            recommendations: result.recommendations.clone(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a plain-text report.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INSIGHTLENS ANALYSIS REPORT")?;
        writeln!(f, "File: {}", self.file_name)?;
        writeln!(
            f,
            "Generated: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;

        writeln!(f)?;
        writeln!(f, "DATASET SUMMARY:")?;
        writeln!(f, "- Rows: {}", self.summary.rows)?;
        writeln!(f, "- Columns: {}", self.summary.columns)?;
        writeln!(f, "- Missing Values: {}", self.summary.missing_values)?;
        writeln!(f, "- Duplicate Rows: {}", self.summary.duplicate_rows)?;

        writeln!(f)?;
        writeln!(f, "KEY METRICS:")?;
        for metric in &self.metrics {
            writeln!(f, "- {}: {}", metric.label, metric.formatted_value())?;
        }

        if let Some(stats) = &self.revenue_statistics {
            writeln!(f)?;
            writeln!(f, "REVENUE STATISTICS ({}):", stats.column)?;
            for (label, value) in stats.rows() {
                let value = if label == "count" {
                    format_number(value)
                } else {
                    format_currency(value)
                };
                writeln!(f, "- {}: {}", label, value)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "BUSINESS INSIGHTS:")?;
        for insight in &self.insights {
            writeln!(f, "- {}", insight)?;
        }

        writeln!(f)?;
        writeln!(f, "RECOMMENDATIONS:")?;
        if self.recommendations.is_empty() {
            writeln!(f, "- None")?;
        }
        for (i, recommendation) in self.recommendations.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, recommendation)?;
        }

        Ok(())
    }
}

/// Write one CSV row per column describing its classification.
pub fn write_column_profile<W: io::Write>(overview: &DatasetOverview, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "column",
        "semantic_type",
        "business_role",
        "business_relevant",
        "unique_values",
        "null_count",
        "non_null_count",
    ])?;

    for column in &overview.columns {
        let unique = column.unique_value_count.to_string();
        let nulls = column.null_count.to_string();
        let filled = column.non_null_count(overview.row_count).to_string();
        csv.write_record([
            column.name.as_str(),
            column.semantic_type.label(),
            column.business_role.label(),
            if column.is_business_relevant { "true" } else { "false" },
            unique.as_str(),
            nulls.as_str(),
            filled.as_str(),
        ])?;
    }

    csv.flush().map_err(|e| InsightError::Io {
        path: "<column profile>".into(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InsightLens;
    use chrono::TimeZone;

    fn sample() -> AnalysisResult {
        InsightLens::new()
            .analyze("amount,date\n10,2024-01-01\n20,2024-01-01\n30,2024-01-02")
            .unwrap()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_json_shape() {
        let report = ExportReport::at("sales.csv", &sample(), fixed_time());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["fileName"], "sales.csv");
        assert_eq!(json["timestamp"], "2024-05-01T12:00:00Z");
        assert!(json["metrics"].as_array().unwrap().len() >= 4);
        assert!(json["insights"].is_array());
        assert!(json["recommendations"].is_array());
        assert_eq!(json["summary"]["rows"], 3);
        assert_eq!(json["summary"]["missingValues"], 0);
        assert_eq!(json["revenueStatistics"]["median"], 20.0);
    }

    #[test]
    fn test_round_trip_keeps_summary() {
        let report = ExportReport::at("sales.csv", &sample(), fixed_time());
        let restored: ExportReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(restored, report);
        let text = restored.to_text();
        assert!(text.contains("DATASET SUMMARY:"));
        assert!(text.contains("- Rows: 3"));
    }

    #[test]
    fn test_text_report() {
        let text = ExportReport::at("sales.csv", &sample(), fixed_time()).to_text();

        assert!(text.starts_with("INSIGHTLENS ANALYSIS REPORT\n"));
        assert!(text.contains("Generated: 2024-05-01T12:00:00Z"));
        assert!(text.contains("- Rows: 3"));
        assert!(text.contains("- Total Revenue: $60.00"));
        assert!(text.contains("REVENUE STATISTICS (amount):"));
        assert!(text.contains("- count: 3\n"));
        assert!(text.contains("- 50%: $20.00"));
        assert!(text.contains("1. "));
    }

    #[test]
    fn test_text_report_without_revenue() {
        let result = InsightLens::new().analyze("x,y\n1,4\n2,5").unwrap();
        let text = ExportReport::at("plain.csv", &result, fixed_time()).to_text();

        assert!(!text.contains("REVENUE STATISTICS"));
        assert!(text.ends_with("RECOMMENDATIONS:\n- None\n"));
    }

    #[test]
    fn test_column_profile_csv() {
        let mut buf = Vec::new();
        write_column_profile(&sample().overview, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "column,semantic_type,business_role,business_relevant,unique_values,null_count,non_null_count"
        );
        assert_eq!(lines[1], "amount,numeric,revenue,true,3,0,3");
        assert_eq!(lines[2], "date,datetime,date,true,2,0,3");
    }
}

//! Headline metric derivation.

use crate::config::InsightThresholds;
use crate::input::Table;
use crate::schema::DatasetOverview;

use super::metric::{DisplayFormat, Metric, Trend};

/// Aggregates over the revenue column's parseable values.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    /// Name of the revenue column.
    pub column: String,
    /// Sum of parseable values.
    pub total: f64,
    /// Number of parseable values.
    pub count: usize,
}

impl RevenueSummary {
    /// Summarize the overview's revenue column, if there is one.
    pub fn compute(table: &Table, overview: &DatasetOverview) -> Option<Self> {
        let column = overview.revenue_column()?;
        let (total, count) = table
            .numbers(column.position)
            .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));

        Some(Self {
            column: column.name.clone(),
            total,
            count,
        })
    }

    /// Mean of parseable values, or 0 when none parsed.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Derives headline metrics from an overview.
pub struct MetricsEngine;

impl MetricsEngine {
    /// Compute metrics in display order.
    pub fn compute(
        table: &Table,
        overview: &DatasetOverview,
        thresholds: &InsightThresholds,
    ) -> Vec<Metric> {
        let mut metrics = vec![
            Metric::new("Total Records", overview.row_count).with_format(DisplayFormat::Number),
            Metric::new("Total Columns", overview.column_count).with_format(DisplayFormat::Number),
        ];

        if let Some(revenue) = RevenueSummary::compute(table, overview) {
            metrics.push(
                Metric::new("Total Revenue", revenue.total)
                    .with_trend(Trend::Up)
                    .with_format(DisplayFormat::Currency),
            );
            metrics.push(
                Metric::new("Average Order Value", revenue.average())
                    .with_format(DisplayFormat::Currency),
            );
        }

        if overview.total_missing_values > 0 {
            let trend = if overview.total_missing_values as f64
                > thresholds.completeness_warning_ratio * overview.row_count as f64
            {
                Trend::Down
            } else {
                Trend::Neutral
            };
            metrics.push(
                Metric::new("Data Completeness", overview.completeness_percent() as f64)
                    .with_trend(trend)
                    .with_format(DisplayFormat::Percentage),
            );
        }

        metrics
    }
}

//! Rule-based insight and recommendation generation.
//!
//! Every rule is independent: each one inspects the overview and fires or
//! stays silent on its own. Only the dataset-size insight is unconditional.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::sum_by_group;
use crate::config::AnalysisConfig;
use crate::inference::parse::parse_date;
use crate::input::Table;
use crate::metrics::{RevenueSummary, format_currency};
use crate::schema::{ColumnInfo, DatasetOverview};

/// Generated observations and advice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Turns an overview into natural-language insights.
pub struct InsightEngine;

impl InsightEngine {
    /// Generate insights and recommendations.
    pub fn generate(table: &Table, overview: &DatasetOverview, config: &AnalysisConfig) -> Insights {
        let revenue = RevenueSummary::compute(table, overview);
        let category = overview.category_column(config.charts.category_max_unique);
        let date = overview.date_column();

        let insights = Self::observations(table, overview, revenue.as_ref(), category, date);
        let recommendations =
            Self::recommendations(overview, config, revenue.as_ref(), category, date);

        debug!(
            insights = insights.len(),
            recommendations = recommendations.len(),
            "generated insights"
        );

        Insights {
            insights,
            recommendations,
        }
    }

    fn observations(
        table: &Table,
        overview: &DatasetOverview,
        revenue: Option<&RevenueSummary>,
        category: Option<&ColumnInfo>,
        date: Option<&ColumnInfo>,
    ) -> Vec<String> {
        let mut insights = vec![format!(
            "Dataset contains {} records across {} columns",
            overview.row_count, overview.column_count
        )];

        if overview.total_missing_values > 0 {
            insights.push(format!(
                "Data completeness is {}% with {} missing values",
                overview.completeness_percent(),
                overview.total_missing_values
            ));
        }

        if overview.duplicate_row_count > 0 {
            insights.push(format!(
                "Found {} duplicate rows",
                overview.duplicate_row_count
            ));
        }

        if let Some(revenue) = revenue {
            insights.push(format!(
                "Total revenue of {} from {} transactions",
                format_currency(revenue.total),
                revenue.count
            ));
        }

        if let Some(customer) = overview.customer_column() {
            insights.push(format!(
                "Dataset includes {} unique customers",
                customer.unique_value_count
            ));
        }

        if let Some(date) = date {
            if let Some(span) = date_span(table, date) {
                insights.push(span);
            }
        }

        if let (Some(revenue), Some(category)) = (overview.revenue_column(), category) {
            if let Some(top) = top_group(table, category, revenue) {
                insights.push(top);
            }
        }

        insights
    }

    fn recommendations(
        overview: &DatasetOverview,
        config: &AnalysisConfig,
        revenue: Option<&RevenueSummary>,
        category: Option<&ColumnInfo>,
        date: Option<&ColumnInfo>,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if overview.total_missing_values as f64
            > config.thresholds.missing_recommendation_ratio * overview.row_count as f64
        {
            recommendations.push(format!(
                "Clean missing values: {} empty cells may skew results, so fill or remove incomplete records",
                overview.total_missing_values
            ));
        }

        if overview.duplicate_row_count > 0 {
            recommendations.push(format!(
                "Remove {} duplicate rows to avoid double-counting",
                overview.duplicate_row_count
            ));
        }

        if let (Some(revenue), Some(date)) = (revenue, date) {
            recommendations.push(format!(
                "Analyze seasonality in {} over {} to anticipate demand peaks",
                revenue.column, date.name
            ));
        }

        if let Some(category) = category {
            recommendations.push(format!(
                "Segment performance by {} to compare groups",
                category.name
            ));
        }

        if let Some(revenue) = revenue {
            recommendations.push(format!(
                "Focus on high-value transactions in {} to grow revenue",
                revenue.column
            ));
        }

        recommendations
    }
}

/// Days between the earliest and latest parseable date.
fn date_span(table: &Table, date: &ColumnInfo) -> Option<String> {
    let days: Vec<_> = table
        .column_values(date.position)
        .filter_map(|c| c.text())
        .filter_map(parse_date)
        .map(|dt| dt.date())
        .collect();

    let first = days.iter().min()?;
    let last = days.iter().max()?;

    Some(format!(
        "Data spans {} days ({} to {})",
        (*last - *first).num_days(),
        first,
        last
    ))
}

/// The category value with the highest summed revenue.
fn top_group(table: &Table, category: &ColumnInfo, revenue: &ColumnInfo) -> Option<String> {
    let totals = sum_by_group(table, category, revenue);

    let mut best: Option<(&str, f64)> = None;
    for (group, total) in totals {
        if best.is_none_or(|(_, b)| total > b) {
            best = Some((group, total));
        }
    }

    best.map(|(group, total)| {
        format!(
            "Top {}: {} ({})",
            category.name,
            group,
            format_currency(total)
        )
    })
}

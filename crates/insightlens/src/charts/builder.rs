//! Derivation of chart series from the classified table.
//!
//! Each chart has a precondition on the overview. When the precondition fails
//! or the data leaves nothing to plot, the chart is omitted entirely.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::debug;

use super::series::{ChartKind, ChartSeries};
use crate::config::ChartConfig;
use crate::input::Table;
use crate::schema::{ColumnInfo, DatasetOverview, SemanticType};

pub const REVENUE_DISTRIBUTION: &str = "Revenue Distribution";
pub const CATEGORY_BREAKDOWN: &str = "Category Breakdown";
pub const REVENUE_TREND: &str = "Revenue Trend";
pub const TOP_CUSTOMERS: &str = "Top Customers by Revenue";
pub const MISSING_VALUES: &str = "Missing Values by Column";
pub const DATA_TYPES: &str = "Data Types";

/// Builds chart series.
pub struct ChartBuilder {
    config: ChartConfig,
}

impl ChartBuilder {
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Build every chart the data supports, in display order.
    pub fn build(&self, table: &Table, overview: &DatasetOverview) -> Vec<ChartSeries> {
        let charts: Vec<ChartSeries> = [
            self.revenue_distribution(table, overview),
            self.category_breakdown(table, overview),
            self.revenue_trend(table, overview),
            self.top_customers(table, overview),
            self.missing_values(overview),
            self.data_types(overview),
        ]
        .into_iter()
        .flatten()
        .collect();

        debug!(charts = charts.len(), "built charts");
        charts
    }

    /// Equal-width histogram of the revenue column.
    pub fn revenue_distribution(
        &self,
        table: &Table,
        overview: &DatasetOverview,
    ) -> Option<ChartSeries> {
        let column = overview.revenue_column()?;
        let values: Vec<f64> = table.numbers(column.position).collect();
        let (categories, counts) = histogram(&values, self.config.histogram_bins)?;

        Some(ChartSeries::new(
            ChartKind::Bar,
            REVENUE_DISTRIBUTION,
            categories,
            counts,
        ))
    }

    /// Most frequent values of the first low-cardinality categorical column.
    pub fn category_breakdown(
        &self,
        table: &Table,
        overview: &DatasetOverview,
    ) -> Option<ChartSeries> {
        let column = overview.category_column(self.config.category_max_unique)?;

        let mut counts: IndexMap<&str, f64> = IndexMap::new();
        for value in table.column_values(column.position).filter_map(|c| c.text()) {
            *counts.entry(value).or_insert(0.0) += 1.0;
        }

        let ranked = self.top_ranked(counts);
        if ranked.is_empty() {
            return None;
        }
        let (categories, values) = ranked.into_iter().unzip();

        Some(ChartSeries::new(ChartKind::Doughnut, CATEGORY_BREAKDOWN, categories, values).with_palette())
    }

    /// Revenue summed per calendar day.
    pub fn revenue_trend(&self, table: &Table, overview: &DatasetOverview) -> Option<ChartSeries> {
        let date = overview.date_column()?;
        let revenue = overview.revenue_column()?;

        let mut by_day: BTreeMap<String, f64> = BTreeMap::new();
        for row in table.rows() {
            let Some(day) = row[date.position].day_key() else {
                continue;
            };
            let Some(amount) = row[revenue.position].number() else {
                continue;
            };
            *by_day.entry(day).or_insert(0.0) += amount;
        }

        if by_day.is_empty() {
            return None;
        }
        let (categories, values) = by_day.into_iter().unzip();

        Some(ChartSeries::new(ChartKind::Line, REVENUE_TREND, categories, values))
    }

    /// Customers ranked by their summed revenue.
    pub fn top_customers(&self, table: &Table, overview: &DatasetOverview) -> Option<ChartSeries> {
        let customer = overview.customer_column()?;
        let revenue = overview.revenue_column()?;

        let totals = sum_by_group(table, customer, revenue);
        let ranked = self.top_ranked(totals);
        if ranked.is_empty() {
            return None;
        }
        let (categories, values) = ranked.into_iter().unzip();

        Some(ChartSeries::new(ChartKind::Bar, TOP_CUSTOMERS, categories, values))
    }

    /// Null counts for columns that have any.
    pub fn missing_values(&self, overview: &DatasetOverview) -> Option<ChartSeries> {
        if overview.total_missing_values == 0 {
            return None;
        }

        let (categories, values) = overview
            .columns
            .iter()
            .filter(|c| c.null_count > 0)
            .map(|c| (c.name.clone(), c.null_count as f64))
            .unzip();

        Some(ChartSeries::new(ChartKind::Bar, MISSING_VALUES, categories, values))
    }

    /// Column counts per semantic type, skipping types with no columns.
    pub fn data_types(&self, overview: &DatasetOverview) -> Option<ChartSeries> {
        let (categories, values): (Vec<String>, Vec<f64>) = [
            (SemanticType::Numeric, overview.numeric_column_count),
            (SemanticType::Categorical, overview.categorical_column_count),
            (SemanticType::Datetime, overview.datetime_column_count),
        ]
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(kind, count)| (kind.label().to_string(), count as f64))
        .unzip();

        if categories.is_empty() {
            return None;
        }

        Some(ChartSeries::new(ChartKind::Doughnut, DATA_TYPES, categories, values).with_palette())
    }

    /// Sort descending by value, keeping insertion order among ties, and keep the top entries.
    fn top_ranked(&self, entries: IndexMap<&str, f64>) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = entries
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(self.config.top_n);
        ranked
    }
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum parseable values of `value` grouped by non-empty values of `group`, in
/// first-encountered order.
pub(crate) fn sum_by_group<'t>(
    table: &'t Table,
    group: &ColumnInfo,
    value: &ColumnInfo,
) -> IndexMap<&'t str, f64> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for row in table.rows() {
        let Some(key) = row[group.position].text() else {
            continue;
        };
        let Some(amount) = row[value.position].number() else {
            continue;
        };
        *totals.entry(key).or_insert(0.0) += amount;
    }
    totals
}

/// Equal-width histogram over `[min, max]`.
///
/// Returns labels `"{start}-{end}"` with rounded bounds and the count per bin.
/// The maximum lands in the last bin; a zero-width range lands in the first.
pub fn histogram(values: &[f64], bins: usize) -> Option<(Vec<String>, Vec<f64>)> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // A range wider than f64::MAX is binned on halved values.
    let mut scale = 1.0;
    let mut width = (max - min) / bins as f64;
    if width.is_infinite() {
        scale = 2.0;
        width = (max / scale - min / scale) / bins as f64;
    }
    let origin = min / scale;
    let bound = |i: usize| (origin + i as f64 * width) * scale;

    let labels = (0..bins)
        .map(|i| format!("{}-{}", bound_label(bound(i)), bound_label(bound(i + 1))))
        .collect();

    let mut counts = vec![0.0; bins];
    for &value in values {
        let index = if width > 0.0 {
            (((value / scale - origin) / width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[index] += 1.0;
    }

    Some((labels, counts))
}

/// Integer-rounded bin bound. Adding zero folds `-0` into `0`.
fn bound_label(bound: f64) -> String {
    format!("{:.0}", bound.round() + 0.0)
}

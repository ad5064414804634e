//! Descriptive statistics for the revenue column.

use serde::{Deserialize, Serialize};

use crate::input::Table;
use crate::schema::DatasetOverview;

/// Count, spread and quartiles of the revenue column's parseable values.
///
/// Quartiles interpolate linearly between closest ranks. `std` is the sample
/// standard deviation and is absent for a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueStatistics {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl RevenueStatistics {
    /// Describe the overview's revenue column. `None` without a revenue column.
    pub fn compute(table: &Table, overview: &DatasetOverview) -> Option<Self> {
        let column = overview.revenue_column()?;
        let mut values: Vec<f64> = table.numbers(column.position).collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (squares / (count - 1) as f64).sqrt()
        });

        Some(Self {
            column: column.name.clone(),
            count,
            mean,
            std,
            min: values[0],
            q1: quantile(&values, 0.25),
            median: quantile(&values, 0.5),
            q3: quantile(&values, 0.75),
            max: values[count - 1],
        })
    }

    /// `(label, value)` rows in display order. `std` is omitted when absent.
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        let mut rows = vec![("count", self.count as f64), ("mean", self.mean)];
        if let Some(std) = self.std {
            rows.push(("std", std));
        }
        rows.extend([
            ("min", self.min),
            ("25%", self.q1),
            ("50%", self.median),
            ("75%", self.q3),
            ("max", self.max),
        ]);
        rows
    }
}

/// Linear-interpolated quantile of sorted, non-empty values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction
}

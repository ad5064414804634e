//! Chart series types.

use serde::{Deserialize, Serialize};

/// Fixed palette assigned to ranked entries.
pub const PALETTE: [&str; 10] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
    "#6366F1", "#84CC16",
];

/// Chart shape understood by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
}

/// Chart-ready data: labels and values aligned by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    /// Per-entry colors, when the chart is ranked.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl ChartSeries {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        categories: Vec<String>,
        values: Vec<f64>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            categories,
            values,
            colors: Vec::new(),
        }
    }

    /// Assign palette colors by rank.
    pub fn with_palette(mut self) -> Self {
        self.colors = (0..self.categories.len())
            .map(|i| PALETTE[i % PALETTE.len()].to_string())
            .collect();
        self
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate `(label, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

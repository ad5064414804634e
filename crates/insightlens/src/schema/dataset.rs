//! Dataset-level overview.

use serde::{Deserialize, Serialize};

use super::column::ColumnInfo;
use super::types::{BusinessRole, SemanticType};

/// Quality statistics for a whole table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetOverview {
    /// Data rows (excluding header).
    pub row_count: usize,
    /// Columns in the header.
    pub column_count: usize,
    /// Per-column classification in column order.
    pub columns: Vec<ColumnInfo>,
    /// Sum of every column's null count.
    pub total_missing_values: usize,
    /// Rows whose content repeats an earlier row.
    pub duplicate_row_count: usize,
    /// Byte length of the raw input.
    pub approximate_size_bytes: usize,
    pub numeric_column_count: usize,
    pub categorical_column_count: usize,
    pub datetime_column_count: usize,
}

impl DatasetOverview {
    /// Get a column by name (first match).
    pub fn get_column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Find columns with a specific business role.
    pub fn columns_with_role(&self, role: BusinessRole) -> impl Iterator<Item = &ColumnInfo> {
        self.columns.iter().filter(move |c| c.business_role == role)
    }

    /// The first numeric revenue-role column. Drives revenue metrics and charts.
    pub fn revenue_column(&self) -> Option<&ColumnInfo> {
        self.columns_with_role(BusinessRole::Revenue)
            .find(|c| c.is_numeric())
    }

    /// The first customer-role column.
    pub fn customer_column(&self) -> Option<&ColumnInfo> {
        self.columns_with_role(BusinessRole::Customer).next()
    }

    /// The first date-role column, falling back to the first datetime-typed one.
    pub fn date_column(&self) -> Option<&ColumnInfo> {
        self.columns_with_role(BusinessRole::Date).next().or_else(|| {
            self.columns
                .iter()
                .find(|c| c.semantic_type == SemanticType::Datetime)
        })
    }

    /// The first categorical column with fewer than `max_unique` distinct values.
    pub fn category_column(&self, max_unique: usize) -> Option<&ColumnInfo> {
        self.columns
            .iter()
            .find(|c| c.is_categorical() && c.unique_value_count < max_unique)
    }

    /// Total cells in the table.
    pub fn total_cells(&self) -> usize {
        self.row_count * self.column_count
    }

    /// Percentage of non-empty cells, rounded to the nearest integer.
    pub fn completeness_percent(&self) -> u32 {
        let total = self.total_cells();
        if total == 0 {
            return 100;
        }
        let filled = total.saturating_sub(self.total_missing_values);
        (100.0 * filled as f64 / total as f64).round() as u32
    }
}

//! Dataset-level aggregation of column classifications.

use std::collections::HashSet;

use tracing::debug;

use crate::inference::ColumnClassifier;
use crate::input::{Cell, Table};
use crate::schema::{DatasetOverview, SemanticType};

/// Builds a [`DatasetOverview`] from a parsed table.
pub struct OverviewBuilder<'a> {
    classifier: &'a ColumnClassifier,
}

impl<'a> OverviewBuilder<'a> {
    pub fn new(classifier: &'a ColumnClassifier) -> Self {
        Self { classifier }
    }

    /// Classify every column and compute table-wide quality statistics.
    ///
    /// `raw_len` is the byte length of the text the table was parsed from.
    pub fn build(&self, table: &Table, raw_len: usize) -> DatasetOverview {
        let columns = self.classifier.classify_table(table);

        let total_missing_values = columns.iter().map(|c| c.null_count).sum();
        let duplicate_row_count = count_duplicate_rows(table);

        let count_type =
            |t: SemanticType| columns.iter().filter(|c| c.semantic_type == t).count();
        let numeric_column_count = count_type(SemanticType::Numeric);
        let categorical_column_count = count_type(SemanticType::Categorical);
        let datetime_column_count = count_type(SemanticType::Datetime);

        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            missing = total_missing_values,
            duplicates = duplicate_row_count,
            "built dataset overview"
        );

        DatasetOverview {
            row_count: table.row_count(),
            column_count: table.column_count(),
            columns,
            total_missing_values,
            duplicate_row_count,
            approximate_size_bytes: raw_len,
            numeric_column_count,
            categorical_column_count,
            datetime_column_count,
        }
    }
}

/// Rows minus distinct row contents.
fn count_duplicate_rows(table: &Table) -> usize {
    let distinct: HashSet<&[Cell]> = table.rows().iter().map(|row| row.as_slice()).collect();
    table.row_count() - distinct.len()
}

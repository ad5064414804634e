//! Per-column classification result.

use serde::{Deserialize, Serialize};

use super::types::{BusinessRole, SemanticType};

/// Classification of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    /// Column name as given in the header.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Inferred value type.
    pub semantic_type: SemanticType,
    /// Distinct non-empty values.
    pub unique_value_count: usize,
    /// Empty cells.
    pub null_count: usize,
    /// Name matches a domain-significant keyword.
    pub is_business_relevant: bool,
    /// Inferred business role.
    pub business_role: BusinessRole,
}

impl ColumnInfo {
    /// Non-empty cells, given the table's row count.
    pub fn non_null_count(&self, row_count: usize) -> usize {
        row_count.saturating_sub(self.null_count)
    }

    pub fn is_numeric(&self) -> bool {
        self.semantic_type == SemanticType::Numeric
    }

    pub fn is_categorical(&self) -> bool {
        self.semantic_type == SemanticType::Categorical
    }
}

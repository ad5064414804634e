//! Column type and business-role inference.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::parse::{parse_date, parse_number};
use crate::config::ClassifierConfig;
use crate::input::{Cell, Table};
use crate::schema::{BusinessRole, ColumnInfo, SemanticType};

// =============================================================================
// NAME PATTERNS
// =============================================================================
// Keyword matches are case-insensitive and unanchored: `total_amount` and
// `CustomerID` both match.

static BUSINESS_RELEVANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(amount|price|cost|revenue|sales|total|customer|client|user|id|date|time|created|updated)",
    )
    .unwrap()
});

static REVENUE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(amount|price|cost|revenue|sales|total|value)").unwrap());

static CUSTOMER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(customer|client|user|id)").unwrap());

static DATE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(date|time|created|updated)").unwrap());

/// Infers semantic type and business role for table columns.
pub struct ColumnClassifier {
    config: ClassifierConfig,
}

impl ColumnClassifier {
    /// Create a classifier with default thresholds.
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom thresholds.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify every column of a table, in column order.
    pub fn classify_table(&self, table: &Table) -> Vec<ColumnInfo> {
        table
            .headers()
            .iter()
            .enumerate()
            .map(|(position, name)| self.classify(name, position, table.column_values(position)))
            .collect()
    }

    /// Classify one column from its cells.
    pub fn classify<'a>(
        &self,
        name: &str,
        position: usize,
        cells: impl IntoIterator<Item = &'a Cell>,
    ) -> ColumnInfo {
        let mut total = 0usize;
        let values: Vec<&str> = cells
            .into_iter()
            .inspect(|_| total += 1)
            .filter_map(Cell::text)
            .collect();

        let null_count = total - values.len();
        let unique_value_count = values.iter().collect::<HashSet<_>>().len();
        let semantic_type = self.infer_type(&values);
        let business_role = self.infer_role(name, semantic_type, unique_value_count, values.len());

        trace!(
            column = name,
            semantic_type = semantic_type.label(),
            role = business_role.label(),
            unique_value_count,
            null_count,
            "classified column"
        );

        ColumnInfo {
            name: name.to_string(),
            position,
            semantic_type,
            unique_value_count,
            null_count,
            is_business_relevant: Self::is_business_relevant(name),
            business_role,
        }
    }

    /// Infer the value type from non-empty values.
    fn infer_type(&self, values: &[&str]) -> SemanticType {
        if values.is_empty() {
            return SemanticType::Categorical;
        }

        let total = values.len() as f64;

        let numeric = values.iter().filter(|v| parse_number(v).is_some()).count();
        if numeric as f64 / total >= self.config.numeric_threshold {
            return SemanticType::Numeric;
        }

        let dates = values.iter().filter(|v| parse_date(v).is_some()).count();
        if dates as f64 / total >= self.config.datetime_threshold {
            return SemanticType::Datetime;
        }

        SemanticType::Categorical
    }

    /// Infer the business role. Name patterns take precedence over shape.
    fn infer_role(
        &self,
        name: &str,
        semantic_type: SemanticType,
        unique_value_count: usize,
        non_null_count: usize,
    ) -> BusinessRole {
        if Self::is_revenue_name(name) {
            return BusinessRole::Revenue;
        }
        if CUSTOMER_NAME.is_match(name) {
            return BusinessRole::Customer;
        }
        if DATE_NAME.is_match(name) {
            return BusinessRole::Date;
        }

        match semantic_type {
            SemanticType::Categorical
                if (unique_value_count as f64)
                    < self.config.category_ratio * non_null_count as f64 =>
            {
                BusinessRole::Category
            }
            SemanticType::Numeric => BusinessRole::Quantity,
            _ => BusinessRole::None,
        }
    }

    /// Whether a column name carries a domain-significant keyword.
    pub fn is_business_relevant(name: &str) -> bool {
        BUSINESS_RELEVANT.is_match(name)
    }

    /// Whether a column name looks monetary.
    pub fn is_revenue_name(name: &str) -> bool {
        REVENUE_NAME.is_match(name)
    }
}

impl Default for ColumnClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<Cell> {
        values.iter().map(|v| Cell::from_field(v)).collect()
    }

    fn classify(name: &str, values: &[&str]) -> ColumnInfo {
        ColumnClassifier::new().classify(name, 0, &cells(values))
    }

    #[test]
    fn test_numeric_revenue_column() {
        let info = classify("amount", &["10", "20", "30"]);
        assert_eq!(info.semantic_type, SemanticType::Numeric);
        assert_eq!(info.business_role, BusinessRole::Revenue);
        assert!(info.is_business_relevant);
    }

    #[test]
    fn test_numeric_threshold_boundary() {
        // 4 of 5 numeric is exactly 80%
        let info = classify("score", &["1", "2", "3", "4", "x"]);
        assert_eq!(info.semantic_type, SemanticType::Numeric);
        assert_eq!(info.business_role, BusinessRole::Quantity);

        // 3 of 5 is below
        let info = classify("score", &["1", "2", "3", "x", "y"]);
        assert_eq!(info.semantic_type, SemanticType::Categorical);
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = ColumnClassifier::with_config(ClassifierConfig {
            numeric_threshold: 0.5,
            ..ClassifierConfig::default()
        });
        let info = classifier.classify("score", 0, &cells(&["1", "2", "3", "x", "y"]));
        assert_eq!(info.semantic_type, SemanticType::Numeric);
    }

    #[test]
    fn test_datetime_column() {
        let info = classify("placed", &["2024-01-01", "2024-02-01", "Mar 3, 2024"]);
        assert_eq!(info.semantic_type, SemanticType::Datetime);
        assert_eq!(info.business_role, BusinessRole::None);
        assert!(!info.is_business_relevant);
    }

    #[test]
    fn test_date_role_from_name() {
        let info = classify("order_date", &["2024-01-01", "2024-02-01"]);
        assert_eq!(info.semantic_type, SemanticType::Datetime);
        assert_eq!(info.business_role, BusinessRole::Date);
    }

    #[test]
    fn test_nulls_and_uniques_ignore_empty() {
        let info = classify("region", &["North", "", "South", "North", ""]);
        assert_eq!(info.null_count, 2);
        assert_eq!(info.unique_value_count, 2);
    }

    #[test]
    fn test_category_role() {
        let info = classify("region", &["North", "South", "North", "South", "North"]);
        assert_eq!(info.semantic_type, SemanticType::Categorical);
        assert_eq!(info.business_role, BusinessRole::Category);

        // 3 unique of 4 is not below half
        let info = classify("region", &["North", "South", "East", "North"]);
        assert_eq!(info.business_role, BusinessRole::None);
    }

    #[test]
    fn test_name_dominates_statistics() {
        // Numeric but named revenue: never quantity
        let info = classify("Revenue", &["1", "2", "3"]);
        assert_eq!(info.business_role, BusinessRole::Revenue);

        // Revenue keywords win over customer keywords
        let info = classify("customer_total", &["1", "2"]);
        assert_eq!(info.business_role, BusinessRole::Revenue);

        // Customer keywords win over date keywords
        let info = classify("user_created", &["a", "b"]);
        assert_eq!(info.business_role, BusinessRole::Customer);

        // "value" is a revenue keyword but not a business-relevant one
        let info = classify("value", &["1", "2"]);
        assert_eq!(info.business_role, BusinessRole::Revenue);
        assert!(!info.is_business_relevant);
    }

    #[test]
    fn test_customer_id_column() {
        let info = classify("customer_id", &["C1", "C2", "C3"]);
        assert_eq!(info.semantic_type, SemanticType::Categorical);
        assert_eq!(info.business_role, BusinessRole::Customer);
        assert_eq!(info.unique_value_count, 3);
    }

    #[test]
    fn test_empty_column() {
        let info = classify("notes", &["", "", ""]);
        assert_eq!(info.semantic_type, SemanticType::Categorical);
        assert_eq!(info.business_role, BusinessRole::None);
        assert_eq!(info.null_count, 3);
        assert_eq!(info.unique_value_count, 0);
    }

    #[test]
    fn test_classify_table_positions() {
        let table = crate::input::Tokenizer::new()
            .tokenize("qty,qty\n1,a\n2,b")
            .unwrap();
        let columns = ColumnClassifier::new().classify_table(&table);

        assert_eq!(columns[0].position, 0);
        assert_eq!(columns[0].semantic_type, SemanticType::Numeric);
        assert_eq!(columns[1].position, 1);
        assert_eq!(columns[1].semantic_type, SemanticType::Categorical);
    }
}

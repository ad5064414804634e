//! Core type definitions for column classification.

use serde::{Deserialize, Serialize};

/// Inferred value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Mostly finite decimal numbers.
    Numeric,
    /// Discrete text values.
    #[default]
    Categorical,
    /// Mostly calendar dates or timestamps.
    Datetime,
}

impl SemanticType {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SemanticType::Numeric => "numeric",
            SemanticType::Categorical => "categorical",
            SemanticType::Datetime => "datetime",
        }
    }
}

/// Business meaning of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessRole {
    /// Monetary amount (e.g., amount, price, total_sales).
    Revenue,
    /// Customer or entity identifier (e.g., customer_id, user).
    Customer,
    /// Transaction or record date.
    Date,
    /// Low-cardinality grouping (e.g., region, product line).
    Category,
    /// Other numeric measure (e.g., quantity, rating).
    Quantity,
    /// No recognizable business meaning.
    #[default]
    None,
}

impl BusinessRole {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessRole::Revenue => "revenue",
            BusinessRole::Customer => "customer",
            BusinessRole::Date => "date",
            BusinessRole::Category => "category",
            BusinessRole::Quantity => "quantity",
            BusinessRole::None => "none",
        }
    }
}

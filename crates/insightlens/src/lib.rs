//! InsightLens: business-oriented analysis of arbitrary CSV tables.
//!
//! InsightLens takes a single delimited text table, classifies each column by
//! type and business role, and derives headline metrics, chart-ready series and
//! plain-language insights from what the data supports.
//!
//! # Core Principles
//!
//! - **Best effort**: Unparseable cells, short rows and missing business columns
//!   degrade the analysis instead of failing it
//! - **Deterministic**: The same text always produces the same result
//! - **Self-contained**: One in-memory table per call, no shared state
//!
//! # Example
//!
//! ```
//! use insightlens::InsightLens;
//!
//! let engine = InsightLens::new();
//! let result = engine
//!     .analyze("amount,date\n10,2024-01-01\n20,2024-01-01\n30,2024-01-02")
//!     .unwrap();
//!
//! println!("Columns: {}", result.overview.column_count);
//! println!("Insights: {}", result.insights.len());
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod inference;
pub mod input;
pub mod insight;
pub mod metrics;
pub mod overview;
pub mod report;
pub mod schema;

mod insightlens;

pub use crate::insightlens::{AnalysisResult, InsightLens};
pub use charts::{ChartBuilder, ChartKind, ChartSeries};
pub use config::{AnalysisConfig, ChartConfig, ClassifierConfig, InsightThresholds};
pub use error::{InsightError, Result};
pub use inference::ColumnClassifier;
pub use input::{Cell, Table, Tokenizer, TokenizerConfig};
pub use insight::{InsightEngine, Insights};
pub use metrics::{DisplayFormat, Metric, MetricValue, MetricsEngine, RevenueStatistics, Trend};
pub use overview::OverviewBuilder;
pub use report::ExportReport;
pub use schema::{BusinessRole, ColumnInfo, DatasetOverview, SemanticType};

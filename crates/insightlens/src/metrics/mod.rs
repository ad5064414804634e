//! Headline metrics.

mod engine;
mod metric;
mod statistics;

pub use engine::{MetricsEngine, RevenueSummary};
pub use statistics::RevenueStatistics;
pub use metric::{DisplayFormat, Metric, MetricValue, Trend, format_currency, format_number};

//! Natural-language insights and recommendations.

mod engine;

pub use engine::{InsightEngine, Insights};

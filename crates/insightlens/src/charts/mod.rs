//! Chart-ready series derived from the analysis.

mod builder;
mod series;

pub use builder::{
    CATEGORY_BREAKDOWN, ChartBuilder, DATA_TYPES, MISSING_VALUES, REVENUE_DISTRIBUTION, REVENUE_TREND,
    TOP_CUSTOMERS, histogram,
};
pub(crate) use builder::sum_by_group;
pub use series::{ChartKind, ChartSeries, PALETTE};

//! Schema types describing the classified table.

mod column;
mod dataset;
mod types;

pub use column::ColumnInfo;
pub use dataset::DatasetOverview;
pub use types::{BusinessRole, SemanticType};

//! Column classification and value interpretation.

mod classifier;
pub mod parse;

pub use classifier::ColumnClassifier;

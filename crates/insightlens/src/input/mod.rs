//! Input tokenizing and the in-memory table.

mod table;
mod tokenizer;

pub use table::{Cell, Table};
pub use tokenizer::{Tokenizer, TokenizerConfig};

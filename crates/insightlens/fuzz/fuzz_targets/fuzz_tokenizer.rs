//! Fuzz target for the tokenizer and the full analysis pipeline.
//!
//! Any UTF-8 text must either tokenize or fail with malformed input, never
//! panic, and a tokenized table must always be rectangular.

#![no_main]

use insightlens::{InsightLens, Tokenizer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(table) = Tokenizer::new().tokenize(content) {
            assert!(table.rows().iter().all(|r| r.len() == table.column_count()));
        }
        let _ = InsightLens::new().analyze(content);
    }
});

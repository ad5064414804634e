//! Fuzz target for number and date parsing.
//!
//! Feeds the fuzzed value as every cell of a small table so type inference,
//! day bucketing and the date-span insight all see it.

#![no_main]

use insightlens::inference::parse::{day_key, parse_date, parse_number};
use insightlens::InsightLens;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_number(content);
        let _ = parse_date(content);
        let _ = day_key(content);

        let value = content.replace(['\n', '\r', ',', '"'], " ");
        let csv = format!(
            "amount,order_date,customer\n{v},{v},{v}\n{v},2024-01-01,{v}\n",
            v = value
        );
        let _ = InsightLens::new().analyze(&csv);
    }
});
